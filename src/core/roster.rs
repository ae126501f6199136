use crate::core::{Roster, Student};
use crate::utils::error::{Result, RosterError};

/// Splits on whitespace and parses every token; one bad token rejects the
/// whole string. Grades must be finite, since JSON has no literal for
/// infinity or NaN.
pub fn parse_grades(text: &str) -> Result<Vec<f64>> {
    text.split_whitespace().map(parse_grade).collect()
}

fn parse_grade(token: &str) -> Result<f64> {
    let grade = token
        .parse::<f64>()
        .map_err(|e| RosterError::InvalidGrade {
            token: token.to_string(),
            reason: e.to_string(),
        })?;

    if !grade.is_finite() {
        return Err(RosterError::InvalidGrade {
            token: token.to_string(),
            reason: "grade must be a finite number".to_string(),
        });
    }
    Ok(grade)
}

/// Appends a student and re-sorts by group number. The sort is stable, so a
/// new student lands after existing members of the same group.
pub fn add_student(
    roster: &mut Roster,
    full_name: &str,
    group_number: &str,
    grades_text: &str,
) -> Result<()> {
    let grades = parse_grades(grades_text)?;
    roster.push(Student::new(full_name, group_number, grades));
    roster.sort_by(|a, b| a.group_number.cmp(&b.group_number));

    tracing::debug!("Roster now holds {} students", roster.len());
    Ok(())
}
