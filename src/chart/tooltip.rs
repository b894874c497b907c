use super::Pos;
use crate::constants::tooltip::{FLIP_FRACTION, FLIP_SHIFT, Y_OFFSET};
use crate::data::Film;
use crate::format::display_value;
use crate::scale::Rgb;

/// Which side of the anchor the tooltip box extends to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipDirection {
    Top,
    Bottom,
}

/// Ordered label/value rows describing one film
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub rows: Vec<(&'static str, String)>,
}

impl TooltipContent {
    pub fn for_film(film: &Film) -> Self {
        Self {
            rows: vec![
                ("Title", film.title.clone()),
                ("Genre", film.genre.clone()),
                ("Director", film.director.clone()),
                ("Runtime (Min)", display_value(film.runtime_minutes)),
                ("Revenue (Millions)", display_value(film.revenue_millions)),
                ("Average Rating", display_value(film.avg_rating)),
            ],
        }
    }

    /// Rows as `Label: value` lines
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|(label, value)| format!("{label}: {value}"))
    }
}

/// A tooltip ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub content: TooltipContent,
    pub anchor: Pos,
    pub direction: TooltipDirection,
    pub fill: Rgb,
}

impl Tooltip {
    /// Place a tooltip for a point drawn at `(x, y)` in a frame of `frame_height`
    pub fn place(content: TooltipContent, x: f64, y: f64, frame_height: f64, fill: Rgb) -> Self {
        let (y, direction) = place_y(y, frame_height);
        Self {
            content,
            anchor: Pos::new(x, y),
            direction,
            fill,
        }
    }
}

/// Anchor y and direction for a point at `y`; flips below points near the top
pub fn place_y(y: f64, frame_height: f64) -> (f64, TooltipDirection) {
    let above = y - Y_OFFSET;
    if above < frame_height * FLIP_FRACTION {
        (above + FLIP_SHIFT, TooltipDirection::Top)
    } else {
        (above, TooltipDirection::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_order() {
        let film = Film::new("Arrival", "Drama", "Denis Villeneuve", 116.0, 100.5, 81.0);
        let content = TooltipContent::for_film(&film);
        let labels: Vec<_> = content.rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Title",
                "Genre",
                "Director",
                "Runtime (Min)",
                "Revenue (Millions)",
                "Average Rating"
            ]
        );
        assert_eq!(content.lines().nth(4).unwrap(), "Revenue (Millions): 100.5");
    }

    #[test]
    fn test_missing_values_render_empty() {
        let film = Film::new("Unknown", "", "", f64::NAN, f64::NAN, 50.0);
        let content = TooltipContent::for_film(&film);
        assert_eq!(content.rows[3].1, "");
        assert_eq!(content.rows[5].1, "50");
    }

    #[test]
    fn test_flip_near_top() {
        assert_eq!(place_y(500.0, 750.0), (480.0, TooltipDirection::Bottom));
        // 200 - 20 = 180 < 187.5
        assert_eq!(place_y(200.0, 750.0), (220.0, TooltipDirection::Top));
        // exactly at the boundary stays below-anchored
        assert_eq!(place_y(207.5, 750.0), (187.5, TooltipDirection::Bottom));
    }
}
