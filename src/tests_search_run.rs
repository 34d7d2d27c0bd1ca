//! End-to-end tests for a full search run
//!
//! Each test writes a CSV fixture to a temporary file and drives
//! `runner::execute_search` the way `main` does.

#[cfg(test)]
mod tests {
    use crate::config::SearchConfig;
    use crate::error::SearchError;
    use crate::runner::{execute_search, execute_search_with};
    use crate::search::SearchOutcome;
    use crate::table::{Table, TableLoader};
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "ID,Name,Desc\n1,A,Product Design\n2,B,Unrelated\n";

    fn fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn config_for(path: &Path, query: &str, keywords: &[&str]) -> SearchConfig {
        SearchConfig {
            csv_path: path.to_path_buf(),
            search_text: query.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn exact_match_reports_first_data_row_as_row_two() {
        let file = fixture(SAMPLE);
        let report = execute_search(&config_for(file.path(), "product design", &[])).unwrap();

        assert!(matches!(report.outcome, SearchOutcome::Exact { .. }));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].row_number, 2);
        assert_eq!(report.rows[0].cells[2].value, "Product Design");
        assert_eq!(report.target_column_name, "Desc");
    }

    #[test]
    fn keyword_fallback_reports_row_three() {
        let file = fixture(SAMPLE);
        let report =
            execute_search(&config_for(file.path(), "zzz-no-such-text", &["Unrelated"])).unwrap();

        match &report.outcome {
            SearchOutcome::Keyword { keyword, rows } => {
                assert_eq!(keyword, "Unrelated");
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].row_number, 3);
            }
            other => panic!("expected keyword outcome, got {:?}", other),
        }
    }

    #[test]
    fn default_keywords_find_partial_matches() {
        let file = fixture(
            "Area,Process,Details\n\
             Ops,Plan,\"Inventory forecasting, demand sensing\"\n\
             Eng,Build,\"Simulation of stress, Prototyping\"\n\
             Eng,Test,\"CAD drafting\"\n",
        );
        let config = SearchConfig {
            csv_path: file.path().to_path_buf(),
            ..SearchConfig::default()
        };

        let report = execute_search(&config).unwrap();

        // "CAD" comes before "Simulation" in the default list
        match &report.outcome {
            SearchOutcome::Keyword { keyword, rows } => {
                assert_eq!(keyword, "CAD");
                assert_eq!(rows.iter().map(|r| r.row_number).collect::<Vec<_>>(), vec![4]);
            }
            other => panic!("expected keyword outcome, got {:?}", other),
        }
    }

    #[test]
    fn default_query_matches_despite_spacing_differences() {
        let file = fixture(
            "Area,Process,Details\n\
             Eng,Design,\"Product Design and Development, Product Design (CAD, Simulation, Prototyping), AIpowered digital twins, Accelerated product development and optimized testing processes\"\n",
        );
        let config = SearchConfig {
            csv_path: file.path().to_path_buf(),
            ..SearchConfig::default()
        };

        let report = execute_search(&config).unwrap();
        assert!(matches!(report.outcome, SearchOutcome::Exact { .. }));
        assert_eq!(report.rows[0].row_number, 2);
    }

    #[test]
    fn two_column_file_is_structural_error() {
        let file = fixture("ID,Name\n1,Product Design\n");
        let err = execute_search(&config_for(file.path(), "product design", &["Product"]))
            .unwrap_err();

        assert!(matches!(err, SearchError::StructuralError { .. }));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = execute_search(&config_for(&path, "x", &[])).unwrap_err();

        assert!(matches!(err, SearchError::FileNotFound { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"ID,Name,Desc\n1,A,\xC3\x28\n").unwrap();
        let err = execute_search(&config_for(file.path(), "x", &[])).unwrap_err();
        assert!(matches!(err, SearchError::ParseError(_)));
    }

    #[test]
    fn empty_query_is_rejected_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-read.csv");
        let err = execute_search(&config_for(&path, "", &[])).unwrap_err();

        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn comma_only_query_is_rejected() {
        let file = fixture("ID,Name,Desc\n1,A,alpha\n2,B,beta\n3,C,gamma\n");
        let err = execute_search(&config_for(file.path(), ", ,", &[])).unwrap_err();

        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn trim_option_strips_padded_cells() {
        let file = fixture("ID, Name , Desc \n1, A , CAD \n");
        let config = SearchConfig {
            trim: true,
            ..config_for(file.path(), "zzz", &["cad"])
        };

        let report = execute_search(&config).unwrap();
        assert_eq!(report.target_column_name, "Desc");
        assert_eq!(report.rows[0].cells[2].value, "CAD");
    }

    #[test]
    fn semicolon_delimiter() {
        let file = fixture("ID;Name;Desc\n1;A;Product Design, CAD\n");
        let config = SearchConfig {
            delimiter: ';',
            ..config_for(file.path(), "product design cad", &[])
        };

        let report = execute_search(&config).unwrap();
        assert_eq!(report.rows.len(), 1);
    }

    struct FixedLoader {
        table: Table,
    }

    impl TableLoader for FixedLoader {
        fn load(&self, _path: &Path) -> Result<Table, SearchError> {
            Ok(self.table.clone())
        }
    }

    #[test]
    fn custom_loader_plugs_into_runner() {
        let loader = FixedLoader {
            table: Table::from_rows(
                &["ID", "Name", "Desc"],
                &[&["1", "A", "digital twins"], &["2", "B"]],
            ),
        };
        let config = config_for(&PathBuf::from("unused"), "zzz", &["Digital Twins"]);

        let report = execute_search_with(&config, &loader).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].row_number, 2);
        assert!(report.to_text().contains("containing 'Digital Twins'"));
    }
}
