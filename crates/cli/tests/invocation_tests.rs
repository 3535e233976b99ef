#[cfg(test)]
mod tests {
    use adjust_cli::cli_args::{Args, Invocation};

    #[test]
    fn test_single_attribute_adjusts() {
        match Args::invocation_from(["adjust", "gamma"]) {
            Invocation::Adjust(args, attribute) => {
                assert_eq!(attribute, "gamma");
                assert!(!args.dry_run);
            }
            other => panic!("Expected Adjust, got {other:?}"),
        }
    }

    #[test]
    fn test_attribute_with_options_adjusts() {
        let invocation = Args::invocation_from(["adjust", "-d", "-c", "/tmp/adjustments", "gamma"]);
        match invocation {
            Invocation::Adjust(args, attribute) => {
                assert_eq!(attribute, "gamma");
                assert!(args.dry_run);
                assert_eq!(args.config_path.as_deref(), Some("/tmp/adjustments"));
            }
            other => panic!("Expected Adjust, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_attribute_is_usage() {
        assert!(matches!(Args::invocation_from(["adjust"]), Invocation::Usage));
        assert!(matches!(
            Args::invocation_from(["adjust", "-d"]),
            Invocation::Usage
        ));
    }

    #[test]
    fn test_extra_arguments_are_usage() {
        assert!(matches!(
            Args::invocation_from(["adjust", "gamma", "brightness"]),
            Invocation::Usage
        ));
    }

    #[test]
    fn test_unknown_option_is_usage() {
        assert!(matches!(
            Args::invocation_from(["adjust", "--frobnicate", "gamma"]),
            Invocation::Usage
        ));
    }

    #[test]
    fn test_list() {
        assert!(matches!(
            Args::invocation_from(["adjust", "--list"]),
            Invocation::List(_)
        ));
        assert!(matches!(
            Args::invocation_from(["adjust", "--list", "gamma"]),
            Invocation::Usage
        ));
    }

    #[test]
    fn test_help_and_version_are_informational() {
        assert!(matches!(
            Args::invocation_from(["adjust", "--help"]),
            Invocation::Informational(_)
        ));
        assert!(matches!(
            Args::invocation_from(["adjust", "--version"]),
            Invocation::Informational(_)
        ));
    }
}
