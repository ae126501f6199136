use crate::core::{Roster, Student};
use crate::utils::error::{Result, RosterError};
use std::io::Write;

pub const AVERAGE_THRESHOLD: f64 = 4.0;

const NAME_WIDTH: usize = 30;
const GROUP_WIDTH: usize = 15;
const GRADES_WIDTH: usize = 20;

/// Mean grade of a student.
///
/// A record with no `grades` key divides an empty sum by 1 and averages 0.
/// A record with an empty list is a division by zero and is an error.
pub fn average(student: &Student) -> Result<f64> {
    match &student.grades {
        None => Ok(0.0),
        Some(grades) if grades.is_empty() => Err(RosterError::EmptyGrades {
            full_name: student.full_name.clone(),
        }),
        Some(grades) => Ok(grades.iter().sum::<f64>() / grades.len() as f64),
    }
}

/// Renders a grade the way it is shown in the table: integral values keep a
/// trailing `.0`, and decimal exponents below -4 or from 16 up switch to
/// scientific notation (`1e+16`, `1.5e-05`).
pub fn format_grade(grade: f64) -> String {
    if grade.is_nan() {
        return "nan".to_string();
    }
    if grade.is_infinite() {
        return if grade > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if grade != 0.0 {
        let scientific = format!("{:e}", grade);
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                if !(-4..16).contains(&exponent) {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
                }
            }
        }
    }

    if grade.fract() == 0.0 {
        format!("{:.1}", grade)
    } else {
        grade.to_string()
    }
}

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(NAME_WIDTH),
        "-".repeat(GROUP_WIDTH),
        "-".repeat(GRADES_WIDTH)
    )
}

/// Writes the table of students whose average is above the threshold.
///
/// Rows are written as they are reached, so an error on one student leaves
/// the preceding rows in `out`.
pub fn render<W: Write>(roster: &Roster, out: &mut W) -> Result<()> {
    let line = border();
    writeln!(out, "{}", line)?;
    writeln!(
        out,
        "| {:^name$} | {:^group$} | {:^grades$} |",
        "Full Name",
        "Group Number",
        "Grades",
        name = NAME_WIDTH,
        group = GROUP_WIDTH,
        grades = GRADES_WIDTH
    )?;
    writeln!(out, "{}", line)?;

    let mut shown = 0usize;
    for student in roster {
        if average(student)? > AVERAGE_THRESHOLD {
            let grades = student
                .grades()
                .iter()
                .map(|g| format_grade(*g))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                out,
                "| {:<name$} | {:<group$} | {:<grades_w$} |",
                student.full_name,
                student.group_number,
                grades,
                name = NAME_WIDTH,
                group = GROUP_WIDTH,
                grades_w = GRADES_WIDTH
            )?;
            shown += 1;
        }
    }

    writeln!(out, "{}", line)?;
    tracing::debug!("Displayed {} of {} students", shown, roster.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(roster: &Roster) -> String {
        let mut out: Vec<u8> = Vec::new();
        render(roster, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_average_missing_key_is_zero() {
        let student = Student {
            full_name: "A".to_string(),
            group_number: "1".to_string(),
            grades: None,
        };
        assert_eq!(average(&student).unwrap(), 0.0);
    }

    #[test]
    fn test_average_empty_list_is_error() {
        let student = Student::new("A", "1", vec![]);
        assert!(matches!(average(&student), Err(RosterError::EmptyGrades { .. })));
    }

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(5.0), "5.0");
        assert_eq!(format_grade(4.1), "4.1");
        assert_eq!(format_grade(4.05), "4.05");
        assert_eq!(format_grade(-0.0), "-0.0");
        assert_eq!(format_grade(0.0001), "0.0001");
        assert_eq!(format_grade(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_format_grade_switches_to_exponent() {
        assert_eq!(format_grade(1e16), "1e+16");
        assert_eq!(format_grade(1.5e16), "1.5e+16");
        assert_eq!(format_grade(0.00001), "1e-05");
        assert_eq!(format_grade(-2.5e-7), "-2.5e-07");
        assert_eq!(format_grade(1e100), "1e+100");
    }

    #[test]
    fn test_filters_by_average() {
        let roster = vec![
            Student::new("Alpha", "1", vec![5.0]),
            Student::new("Beta", "1", vec![3.0]),
            Student::new("Gamma", "2", vec![4.0, 4.1]),
        ];
        let output = render_to_string(&roster);
        let rows: Vec<&str> = output.lines().filter(|l| l.starts_with("| ")).skip(1).collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("| Alpha "));
        assert!(rows[1].starts_with("| Gamma "));
        assert!(rows[1].contains("| 4.0, 4.1 "));
        assert!(!output.contains("Beta"));
    }

    #[test]
    fn test_exact_threshold_is_omitted() {
        let roster = vec![Student::new("Edge", "1", vec![4.0, 4.0])];
        assert!(!render_to_string(&roster).contains("Edge"));
    }

    #[test]
    fn test_table_layout() {
        let roster = vec![Student::new("Иванов И.И.", "ИВТ-1", vec![5.0, 5.0])];
        let output = render_to_string(&roster);
        let lines: Vec<&str> = output.lines().collect();

        let border = format!("+-{}-+-{}-+-{}-+", "-".repeat(30), "-".repeat(15), "-".repeat(20));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], border);
        assert_eq!(
            lines[1],
            "|           Full Name            |  Group Number   |        Grades        |"
        );
        assert_eq!(lines[2], border);
        assert_eq!(
            lines[3],
            "| Иванов И.И.                    | ИВТ-1           | 5.0, 5.0             |"
        );
        assert_eq!(lines[4], border);
    }

    #[test]
    fn test_empty_roster_prints_bare_table() {
        assert_eq!(render_to_string(&Roster::new()).lines().count(), 4);
    }

    #[test]
    fn test_empty_grades_fails_after_earlier_rows() {
        let roster = vec![
            Student::new("Shown", "1", vec![5.0]),
            Student::new("Broken", "2", vec![]),
        ];
        let mut out: Vec<u8> = Vec::new();

        assert!(render(&roster, &mut out).is_err());
        assert!(String::from_utf8(out).unwrap().contains("Shown"));
    }
}
