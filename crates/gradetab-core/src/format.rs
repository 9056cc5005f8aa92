//! Display rendering for class records
//!
//! [`render_class`] is a one-way projection: it is what the user sees, and
//! nothing is ever parsed back out of it. The structured [`GradeSet`] is the
//! source of truth end to end.

use crate::error::Result;
use crate::grades::{Category, GradeSet};

/// Render a grade list the way it is typed and stored: comma-separated,
/// no surrounding spaces
pub fn grade_list(grades: &[f64]) -> String {
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Render one class record as display text
pub fn render_class(entry: &GradeSet) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "# Minor Assessments: {}\n",
        entry.grade_count(Category::Minor)
    ));
    out.push_str(&format!(
        "# Major Assessments: {}\n",
        entry.grade_count(Category::Major)
    ));
    out.push_str(&format!(
        "Minor Assessment Grades: {}\n",
        grade_list(&entry.minor_grades)
    ));
    out.push_str(&format!(
        "Major Assessment Grades: {}\n",
        grade_list(&entry.major_grades)
    ));
    out.push_str(&format!(
        "Weight for Minor Assessments: {}%\n",
        entry.minor_weight
    ));
    out.push_str(&format!(
        "Weight for Major Assessments: {}%\n",
        entry.major_weight
    ));
    out.push_str(&format!("Class Average: {}%\n", entry.class_average()?));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_list_rendering() {
        assert_eq!(grade_list(&[]), "");
        assert_eq!(grade_list(&[80.0, 90.5, 100.0]), "80,90.5,100");
    }

    #[test]
    fn test_render_class() {
        let entry = GradeSet::new(
            "Math",
            vec![80.0, 90.0, 100.0],
            vec![75.0, 85.0],
            70.0,
            30.0,
        );
        let text = render_class(&entry).unwrap();
        assert_eq!(
            text,
            "# Minor Assessments: 3\n\
             # Major Assessments: 2\n\
             Minor Assessment Grades: 80,90,100\n\
             Major Assessment Grades: 75,85\n\
             Weight for Minor Assessments: 70%\n\
             Weight for Major Assessments: 30%\n\
             Class Average: 87%\n"
        );
    }

    #[test]
    fn test_render_class_degenerate_weights() {
        let entry = GradeSet::new("Art", vec![90.0], vec![], 0.0, 0.0);
        assert!(render_class(&entry).is_err());
    }
}
