//! Film records as loaded from the dataset

use std::path::{Path, PathBuf};

/// One row of the film dataset
///
/// Created once at load time and never mutated. Missing numeric cells are
/// `NaN`, missing text cells are empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub title: String,
    pub genre: String,
    pub director: String,
    pub runtime_minutes: f64,
    pub revenue_millions: f64,
    pub avg_rating: f64,
}

impl Film {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        director: impl Into<String>,
        runtime_minutes: f64,
        revenue_millions: f64,
        avg_rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            director: director.into(),
            runtime_minutes,
            revenue_millions,
            avg_rating,
        }
    }
}

/// The loaded film table
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    films: Vec<Film>,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn new(films: Vec<Film>, source: Option<PathBuf>) -> Self {
        Self { films, source }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Film> {
        self.films.get(index)
    }

    /// Path the dataset was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All ratings, in row order
    pub fn ratings(&self) -> impl Iterator<Item = f64> + '_ {
        self.films.iter().map(|f| f.avg_rating)
    }

    /// All runtimes, in row order
    pub fn runtimes(&self) -> impl Iterator<Item = f64> + '_ {
        self.films.iter().map(|f| f.runtime_minutes)
    }
}

impl FromIterator<Film> for Dataset {
    fn from_iter<I: IntoIterator<Item = Film>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), None)
    }
}
