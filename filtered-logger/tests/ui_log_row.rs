mod log_row {
    #[test]
    fn accepts_plain_struct() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/log_row_plain_ok.rs");
    }

    #[test]
    fn accepts_options_and_renames() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/log_row_options_ok.rs");
    }

    #[test]
    fn accepts_generic_struct() {
        let t = trybuild::TestCases::new();
        t.pass("tests/ui/log_row_generic_ok.rs");
    }

    #[test]
    fn rejects_enum() {
        let t = trybuild::TestCases::new();
        t.compile_fail("tests/ui/log_row_enum_rejected.rs");
    }

    #[test]
    fn rejects_tuple_struct() {
        let t = trybuild::TestCases::new();
        t.compile_fail("tests/ui/log_row_tuple_rejected.rs");
    }

    #[test]
    fn rejects_skip_with_sensitive() {
        let t = trybuild::TestCases::new();
        t.compile_fail("tests/ui/log_row_skip_sensitive_rejected.rs");
    }
}
