use super::table::{Cell, Table};
use crate::Result;
use crate::models::ProjectVersion;
use core::fmt::Write;

pub fn generate<W: Write>(versions: &[ProjectVersion], use_colors: bool, writer: &mut W) -> Result<()> {
    let mut table = Table::new(&["ID", "Name"]);
    for version in versions {
        table.push([Cell::from(version.id.to_string()), Cell::from(version.name.as_str())]);
    }

    table.render(use_colors, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_table() {
        let versions = [
            ProjectVersion {
                id: 11,
                name: "1.0".to_string(),
                project: None,
            },
            ProjectVersion {
                id: 12,
                name: "main".to_string(),
                project: None,
            },
        ];

        let mut output = String::new();
        generate(&versions, false, &mut output).unwrap();
        assert_eq!(
            output,
            "+----+------+\n| ID | Name |\n+----+------+\n| 11 | 1.0  |\n| 12 | main |\n+----+------+\n"
        );
    }
}
