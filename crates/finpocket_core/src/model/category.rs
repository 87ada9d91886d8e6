use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Expense category.
///
/// The serialized form is the display label, accents included, so stored
/// collections stay readable by any client that shares the same slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Entretenimiento")]
    Entertainment,
    #[serde(rename = "Salidas")]
    Outings,
    #[default]
    #[serde(rename = "Alimentación")]
    Food,
    #[serde(rename = "Personal")]
    Personal,
    #[serde(rename = "Regalos")]
    Gifts,
    #[serde(rename = "Educación")]
    Education,
    #[serde(rename = "Otros")]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Entertainment,
        ExpenseCategory::Outings,
        ExpenseCategory::Food,
        ExpenseCategory::Personal,
        ExpenseCategory::Gifts,
        ExpenseCategory::Education,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Entertainment => "Entretenimiento",
            ExpenseCategory::Outings => "Salidas",
            ExpenseCategory::Food => "Alimentación",
            ExpenseCategory::Personal => "Personal",
            ExpenseCategory::Gifts => "Regalos",
            ExpenseCategory::Education => "Educación",
            ExpenseCategory::Other => "Otros",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
        write!(
            f,
            "unknown category '{}' (expected one of: {})",
            self.0,
            labels.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Accepts the label itself or any case/accent variant of it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold(s.trim());
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| fold(c.label()) == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Lowercase and strip the accents used by the category labels
fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}
