use polars::prelude::*;
use std::path::{Path, PathBuf};

use super::film::{Dataset, Film};
use crate::error::{DataLoadError, Result};

pub const COL_TITLE: &str = "Title";
pub const COL_GENRE: &str = "Genre";
pub const COL_DIRECTOR: &str = "Director";
pub const COL_RUNTIME: &str = "Runtime";
pub const COL_REVENUE: &str = "Revenue";
pub const COL_RATING: &str = "AvgRating";

/// DataSource wraps the Polars DataFrame read from the film CSV
pub struct DataSource {
    /// Materialized DataFrame
    materialized: DataFrame,
    /// Original file path
    file_path: Option<PathBuf>,
}

impl DataSource {
    /// Load data from a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        if !extension.eq_ignore_ascii_case("csv") {
            return Err(DataLoadError::UnsupportedFormat { extension });
        }

        // Surface a missing file as an I/O error rather than a polars one
        std::fs::metadata(path)?;

        let materialized = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?
            .collect()?;

        Ok(Self {
            materialized,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.materialized.height()
    }

    fn series(&self, name: &str) -> Option<&Series> {
        match self.materialized.column(name) {
            Ok(column) => Some(column.as_materialized_series()),
            Err(_) => {
                log::warn!("column '{}' missing, passing values through as empty", name);
                None
            }
        }
    }

    /// Get a column's numeric values as Vec<f64>
    /// Missing or non-numeric values are converted to NaN
    pub fn numeric_column(&self, name: &str) -> Vec<f64> {
        let n = self.height();
        let Some(series) = self.series(name) else {
            return vec![f64::NAN; n];
        };

        match series.cast(&DataType::Float64) {
            Ok(s) => match s.f64() {
                Ok(ca) => ca.into_iter().map(|opt| opt.unwrap_or(f64::NAN)).collect(),
                Err(_) => vec![f64::NAN; n],
            },
            Err(_) => vec![f64::NAN; n],
        }
    }

    /// Get a column's values as text; missing cells become empty strings
    pub fn text_column(&self, name: &str) -> Vec<String> {
        let n = self.height();
        let Some(series) = self.series(name) else {
            return vec![String::new(); n];
        };

        if let Ok(ca) = series.str() {
            return ca
                .into_iter()
                .map(|opt| opt.unwrap_or("").to_string())
                .collect();
        }

        match series.cast(&DataType::String) {
            Ok(s) => match s.str() {
                Ok(ca) => ca
                    .into_iter()
                    .map(|opt| opt.unwrap_or("").to_string())
                    .collect(),
                Err(_) => vec![String::new(); n],
            },
            Err(_) => vec![String::new(); n],
        }
    }

    /// Extract the film records, in row order
    pub fn to_dataset(&self) -> Dataset {
        profiling::scope!("extract_films");

        let titles = self.text_column(COL_TITLE);
        let genres = self.text_column(COL_GENRE);
        let directors = self.text_column(COL_DIRECTOR);
        let runtimes = self.numeric_column(COL_RUNTIME);
        let revenues = self.numeric_column(COL_REVENUE);
        let ratings = self.numeric_column(COL_RATING);

        let films = titles
            .into_iter()
            .zip(genres)
            .zip(directors)
            .zip(runtimes.into_iter().zip(revenues).zip(ratings))
            .map(|(((title, genre), director), ((runtime, revenue), rating))| Film {
                title,
                genre,
                director,
                runtime_minutes: runtime,
                revenue_millions: revenue,
                avg_rating: rating,
            })
            .collect();

        Dataset::new(films, self.file_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_film_csv_loading() {
        let file = write_csv(&[
            "Title,Genre,Director,Runtime,Revenue,AvgRating",
            "Guardians of the Galaxy,Action,James Gunn,121,333.13,76",
            "\"Sing, Again\",Animation,Christophe Lourdelet,108,270.32,68",
        ]);

        let ds = DataSource::load(file.path()).unwrap();
        assert_eq!(ds.height(), 2);

        let dataset = ds.to_dataset();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.films()[0];
        assert_eq!(first.title, "Guardians of the Galaxy");
        assert_eq!(first.genre, "Action");
        assert_eq!(first.director, "James Gunn");
        assert_eq!(first.runtime_minutes, 121.0);
        assert_eq!(first.revenue_millions, 333.13);
        assert_eq!(first.avg_rating, 76.0);

        assert_eq!(dataset.films()[1].title, "Sing, Again");
        assert_eq!(dataset.source(), Some(file.path()));
    }

    #[test]
    fn test_missing_values_pass_through() {
        let file = write_csv(&[
            "Title,Genre,Director,Runtime,Revenue,AvgRating",
            "Silence,Drama,Martin Scorsese,161,,65",
            ",Horror,,94,n/a,52",
        ]);

        let dataset = DataSource::load(file.path()).unwrap().to_dataset();
        assert!(dataset.films()[0].revenue_millions.is_nan());
        assert_eq!(dataset.films()[1].title, "");
        assert_eq!(dataset.films()[1].director, "");
        assert!(dataset.films()[1].revenue_millions.is_nan());
        assert_eq!(dataset.films()[1].avg_rating, 52.0);
    }

    #[test]
    fn test_missing_column_is_not_an_error() {
        let file = write_csv(&["Title,Genre,Runtime", "Split,Horror,117"]);

        let dataset = DataSource::load(file.path()).unwrap().to_dataset();
        let film = &dataset.films()[0];
        assert_eq!(film.title, "Split");
        assert_eq!(film.director, "");
        assert!(film.avg_rating.is_nan());
        assert!(film.revenue_millions.is_nan());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = DataSource::load(file.path()).err().unwrap();
        assert!(matches!(err, DataLoadError::UnsupportedFormat { ref extension } if extension == "xlsx"));
    }

    #[test]
    fn test_missing_file() {
        let err = DataSource::load(Path::new("definitely/not/here.csv"))
            .err()
            .unwrap();
        assert!(matches!(err, DataLoadError::FileIo(_)));
    }
}
