//! Semester value model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One of the three terms of an academic year, in academic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// Opens the academic year (September–December)
    Fall,
    /// January–April of the following calendar year
    Spring,
    /// May–August of the following calendar year
    Summer,
}

impl Term {
    /// All terms in academic order
    pub const ALL: [Self; 3] = [Self::Fall, Self::Spring, Self::Summer];

    /// Look up a term by its exact label spelling (`"Fall"`, `"Spring"`, `"Summer"`)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Fall" => Some(Self::Fall),
            "Spring" => Some(Self::Spring),
            "Summer" => Some(Self::Summer),
            _ => None,
        }
    }

    /// Position within the academic year (Fall = 0, Spring = 1, Summer = 2)
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Fall => 0,
            Self::Spring => 1,
            Self::Summer => 2,
        }
    }

    /// Inverse of [`Term::index`]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Fall),
            1 => Some(Self::Spring),
            2 => Some(Self::Summer),
            _ => None,
        }
    }

    /// Label spelling of the term
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison key of a semester: the academic year it belongs to (named by
/// the calendar year of its Fall) and the term index within that year.
///
/// Field order matters: the derived `Ord` compares `year` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AcademicState {
    /// Academic year, anchored by its Fall term. Wider than a label year so
    /// the Spring/Summer offset never overflows.
    pub year: i64,
    /// Term index, 0..=2
    pub index: u8,
}

impl AcademicState {
    /// The state that follows this one (Summer rolls over to next Fall)
    #[must_use]
    pub const fn next(self) -> Self {
        if self.index < 2 {
            Self {
                year: self.year,
                index: self.index + 1,
            }
        } else {
            Self {
                year: self.year + 1,
                index: 0,
            }
        }
    }
}

/// A well-formed academic term such as "Spring 2025".
///
/// `year` is the calendar year printed in the label; ordering goes through
/// [`AcademicState`] so that Fall 2024 < Spring 2025 < Summer 2025 < Fall 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Semester {
    /// Term of the semester
    pub term: Term,
    /// Calendar year printed in the label
    pub year: i32,
}

impl Semester {
    /// Create a semester from its label parts
    #[must_use]
    pub const fn new(term: Term, year: i32) -> Self {
        Self { term, year }
    }

    /// Map to the comparison key. Fall Y → (Y, 0), Spring Y → (Y-1, 1),
    /// Summer Y → (Y-1, 2).
    #[must_use]
    pub fn academic_state(self) -> AcademicState {
        let year = i64::from(self.year);
        let year = match self.term {
            Term::Fall => year,
            Term::Spring | Term::Summer => year - 1,
        };
        AcademicState {
            year,
            index: self.term.index(),
        }
    }

    /// Inverse of [`Semester::academic_state`]. Returns `None` for an index
    /// outside 0..=2 or a label year that does not fit in an `i32`.
    #[must_use]
    pub fn from_state(state: AcademicState) -> Option<Self> {
        let term = Term::from_index(state.index)?;
        let year = match term {
            Term::Fall => state.year,
            Term::Spring | Term::Summer => state.year + 1,
        };
        i32::try_from(year).ok().map(|year| Self::new(term, year))
    }

    /// The chronologically next semester
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_state(self.academic_state().next())
    }

    /// Calendar year of the Fall that opens this semester's academic year
    #[must_use]
    pub fn academic_year_start(self) -> i64 {
        self.academic_state().year
    }
}

impl Ord for Semester {
    fn cmp(&self, other: &Self) -> Ordering {
        self.academic_state().cmp(&other.academic_state())
    }
}

impl PartialOrd for Semester {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

impl FromStr for Semester {
    type Err = String;

    /// Strict parse used for data entry: exactly `"<Term> <Year>"` with a
    /// known term name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(term), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Invalid semester '{s}': expected '<Term> <Year>'"));
        };
        let term = Term::from_name(term)
            .ok_or_else(|| format!("Invalid term '{term}': expected Fall, Spring or Summer"))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| format!("Invalid year '{year}' in semester '{s}'"))?;
        Ok(Self::new(term, year))
    }
}
