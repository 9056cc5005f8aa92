//! Grade record model and averaging
//!
//! A [`GradeSet`] is one class's grades: two assessment categories ("minor"
//! and "major"), each an ordered list of scores, plus the percentage weight
//! of each category. Averages are always derived from the stored lists,
//! never cached.

use serde::{Deserialize, Serialize};

use crate::error::{GradetabError, Result};

/// The two assessment categories tracked per class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Minor,
    Major,
}

/// One class's grade record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSet {
    /// Class name, unique within a roster (exact, case-sensitive)
    pub class_name: String,
    /// Minor assessment scores, in entry order
    pub minor_grades: Vec<f64>,
    /// Major assessment scores, in entry order
    pub major_grades: Vec<f64>,
    /// Percentage weight of the minor category
    pub minor_weight: f64,
    /// Percentage weight of the major category
    pub major_weight: f64,
}

impl GradeSet {
    pub fn new(
        class_name: impl Into<String>,
        minor_grades: Vec<f64>,
        major_grades: Vec<f64>,
        minor_weight: f64,
        major_weight: f64,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            minor_grades,
            major_grades,
            minor_weight,
            major_weight,
        }
    }

    /// Number of grades recorded in the given category
    pub fn grade_count(&self, category: Category) -> usize {
        match category {
            Category::Minor => self.minor_grades.len(),
            Category::Major => self.major_grades.len(),
        }
    }

    pub fn minor_average(&self) -> f64 {
        average(&self.minor_grades)
    }

    pub fn major_average(&self) -> f64 {
        average(&self.major_grades)
    }

    /// Weighted class average.
    ///
    /// Weights that do not sum to 100 are divided by their actual sum, so
    /// stale weight pairs still renormalize; a zero sum has no defined
    /// average and errors instead.
    pub fn class_average(&self) -> Result<f64> {
        let total = self.minor_weight + self.major_weight;
        if total == 0.0 {
            return Err(GradetabError::DegenerateWeights {
                name: self.class_name.clone(),
            });
        }
        Ok(round2(
            (self.minor_average() * self.minor_weight + self.major_average() * self.major_weight)
                / total,
        ))
    }
}

/// Arithmetic mean rounded to two decimals; 0 for an empty list
pub fn average(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    round2(grades.iter().sum::<f64>() / grades.len() as f64)
}

/// Round to two decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a comma-separated grade list. An empty string is an empty list.
pub fn parse_grade_list(text: &str) -> Result<Vec<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<f64>()
                .map_err(|_| GradetabError::invalid_number("grade", item))
        })
        .collect()
}

/// Parse a weight percentage, rejecting values outside 0..=100
pub fn parse_weight(text: &str) -> Result<f64> {
    let text = text.trim();
    let weight: f64 = text
        .parse()
        .map_err(|_| GradetabError::invalid_number("weight", text))?;
    if !(0.0..=100.0).contains(&weight) {
        return Err(GradetabError::InvalidWeight {
            value: text.to_string(),
        });
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        assert_eq!(average(&[80.0, 90.0, 100.0]), 90.0);
        // 1/3 = 0.333...
        assert_eq!(average(&[0.0, 0.0, 1.0]), 0.33);
        // 2/3 = 0.666... rounds up
        assert_eq!(average(&[0.0, 1.0, 1.0]), 0.67);
    }

    #[test]
    fn test_class_average_weighted() {
        let set = GradeSet::new(
            "Math",
            vec![80.0, 90.0, 100.0],
            vec![75.0, 85.0],
            70.0,
            30.0,
        );
        assert_eq!(set.minor_average(), 90.0);
        assert_eq!(set.major_average(), 80.0);
        assert_eq!(set.class_average().unwrap(), 87.0);
    }

    #[test]
    fn test_class_average_equal_weights_is_midpoint() {
        let set = GradeSet::new("Sci", vec![90.0], vec![70.0], 50.0, 50.0);
        assert_eq!(
            set.class_average().unwrap(),
            (set.minor_average() + set.major_average()) / 2.0
        );
    }

    #[test]
    fn test_class_average_renormalizes_stale_weights() {
        // Weights summing to 120 still divide by the actual sum.
        let set = GradeSet::new("Hist", vec![90.0], vec![60.0], 90.0, 30.0);
        assert_eq!(set.class_average().unwrap(), 82.5);
    }

    #[test]
    fn test_class_average_zero_weights_errors() {
        let set = GradeSet::new("Art", vec![90.0], vec![60.0], 0.0, 0.0);
        assert!(matches!(
            set.class_average(),
            Err(GradetabError::DegenerateWeights { .. })
        ));
    }

    #[test]
    fn test_grade_count() {
        let set = GradeSet::new("Math", vec![80.0, 90.0], vec![], 70.0, 30.0);
        assert_eq!(set.grade_count(Category::Minor), 2);
        assert_eq!(set.grade_count(Category::Major), 0);
    }

    #[test]
    fn test_parse_grade_list() {
        assert_eq!(parse_grade_list("").unwrap(), Vec::<f64>::new());
        assert_eq!(
            parse_grade_list("80,90,100").unwrap(),
            vec![80.0, 90.0, 100.0]
        );
        assert_eq!(parse_grade_list(" 80 , 90.5 ").unwrap(), vec![80.0, 90.5]);
    }

    #[test]
    fn test_parse_grade_list_rejects_garbage() {
        assert!(matches!(
            parse_grade_list("80,ninety"),
            Err(GradetabError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_weight_range() {
        assert_eq!(parse_weight("70").unwrap(), 70.0);
        assert_eq!(parse_weight("0").unwrap(), 0.0);
        assert_eq!(parse_weight("100").unwrap(), 100.0);
        assert!(matches!(
            parse_weight("150"),
            Err(GradetabError::InvalidWeight { .. })
        ));
        assert!(matches!(
            parse_weight("-5"),
            Err(GradetabError::InvalidWeight { .. })
        ));
        assert!(matches!(
            parse_weight("seventy"),
            Err(GradetabError::InvalidNumber { .. })
        ));
    }
}
