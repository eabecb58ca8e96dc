use super::common::{DESCRIPTION_LIMIT, truncate};
use super::table::{Cell, Table};
use crate::Result;
use crate::models::Project;
use core::fmt::Write;

pub fn generate<W: Write>(projects: &[Project], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut table = Table::new(&["ID", "Name", "Description"]);
    for project in projects {
        table.push([
            Cell::from(project.id.to_string()),
            Cell::from(project.name.as_str()),
            Cell::from(truncate(&project.description, DESCRIPTION_LIMIT)),
        ]);
    }

    table.render(use_colors, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_descriptions_are_cut() {
        let projects = [
            Project {
                id: 1,
                name: "Portal".to_string(),
                description: "d".repeat(80),
            },
            Project {
                id: 2,
                name: "Gateway".to_string(),
                description: String::new(),
            },
        ];

        let mut output = String::new();
        generate(&projects, false, &mut output).unwrap();

        assert!(output.contains(&format!("| {}... |", "d".repeat(47))));
        assert!(!output.contains(&"d".repeat(48)));
        assert!(output.contains("| 2  | Gateway |"));
    }
}
