mod common;

#[cfg(test)]
mod util
{
    use std::fs::remove_file;

    use muffle::util::{compile_pattern, matches_one, read_file_utf8, write_file_bytes};
    use uuid::Uuid;

    #[test]
    fn test_compile_pattern()
    {
        let pattern = compile_pattern("error").unwrap();

        assert!(pattern.is_match("error"));
        assert!(pattern.is_match("ERROR"));
        assert!(pattern.is_match("an ErRoR occurred"));
        assert!(!pattern.is_match("all good"));

        assert!(compile_pattern("(").is_err());
        assert!(compile_pattern("[a-").is_err());
    }

    #[test]
    fn test_matches_one()
    {
        let uri = "this/is/some/uri.txt";

        let patterns: Vec<regex::Regex> = vec!["rnaomd", "this", r"\.txt$"]
            .into_iter()
            .map(|p| compile_pattern(p).unwrap())
            .collect();

        assert!(matches_one(uri, &patterns));
        assert!(matches_one(uri, &patterns[1..2]));
        assert!(matches_one(uri, &patterns[2..]));
        assert!(!matches_one(uri, &patterns[0..1]));
        assert!(!matches_one("nothing here", &patterns));
        assert!(!matches_one(uri, &[]));
    }

    #[test]
    fn test_read_write_utf8()
    {
        let expected = "this is a file written by muffle";
        let file_name = format!("tests/utf8-{}", Uuid::new_v4());

        write_file_bytes(&file_name, expected.as_bytes());

        let actual = read_file_utf8(&file_name).unwrap();
        assert_eq!(actual, expected);

        remove_file(file_name).unwrap();
    }

    #[test]
    fn test_read_missing_file()
    {
        assert!(read_file_utf8("not_a_file").is_none());
    }
}
