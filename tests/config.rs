#[cfg(test)]
mod tests {
    use simcal::libs::config::{CalendarConfig, Config};
    use simcal::libs::month::WeekStart;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(ctx.temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.week_start(), WeekStart::Sunday);
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            database: Some(PathBuf::from("/var/lib/simcal/calendar.db")),
            calendar: Some(CalendarConfig {
                week_start: WeekStart::Monday,
            }),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::read_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.week_start(), WeekStart::Monday);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_sections_are_omitted(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_is_accepted(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"calendar": {"week_start": "monday"}}"#).unwrap();
        assert_eq!(Config::read_from(&path).unwrap().week_start(), WeekStart::Monday);

        std::fs::write(&path, r#"{"calendar": {}}"#).unwrap();
        assert_eq!(Config::read_from(&path).unwrap().week_start(), WeekStart::Sunday);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&path).is_err());
    }
}
