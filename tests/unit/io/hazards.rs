//! Tests for hazard list parsing and loading

#[cfg(test)]
mod tests {
    use crate::at;
    use probenav::NavigationError;
    use probenav::io::hazards::{load_hazards, parse_hazard_line, parse_hazards};
    use probenav::spatial::{HazardRecord, TileKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_each_kind() {
        let text = "B 1 2 3\nK 0 0 9\nP 99 99 99\n";
        let records = parse_hazards(text).ok();

        assert_eq!(
            records,
            Some(vec![
                HazardRecord::new(TileKind::BlackHole, at(1, 2, 3)),
                HazardRecord::new(TileKind::Creature, at(0, 0, 9)),
                HazardRecord::new(TileKind::Planet, at(99, 99, 99)),
            ])
        );
    }

    #[test]
    fn test_blank_lines_and_padding_are_ignored() {
        assert!(matches!(parse_hazard_line("   ", 1), Ok(None)));

        let records = parse_hazards("\n  P   4 5 6  \n\n").ok();
        assert_eq!(
            records,
            Some(vec![HazardRecord::new(TileKind::Planet, at(4, 5, 6))])
        );
    }

    // Tests bomb markers and unknown tags are rejected with their line number
    #[test]
    fn test_unknown_tags_are_rejected() {
        assert!(matches!(
            parse_hazard_line("M 1 1 1", 4),
            Err(NavigationError::HazardParse { line: 4, .. })
        ));
        assert!(matches!(
            parse_hazards("P 1 1 1\nX 2 2 2"),
            Err(NavigationError::HazardParse { line: 2, .. })
        ));
    }

    #[test]
    fn test_bad_coordinates_are_rejected() {
        for line in ["P 1 2", "P 1 2 3 4", "K a b c", "B 100 0 0", "B -1 0 0", "P"] {
            assert!(
                matches!(
                    parse_hazard_line(line, 1),
                    Err(NavigationError::HazardParse { .. })
                ),
                "accepted {line:?}"
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "K 1 0 0").unwrap();
        writeln!(file, "P 5 0 0").unwrap();
        file.flush().unwrap();

        let records = load_hazards(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.first().map(|r| r.kind), Some(TileKind::Creature));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");

        match load_hazards(&missing) {
            Err(NavigationError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "read hazard list");
            }
            other => unreachable!("expected a file system error, got {other:?}"),
        }
    }
}
