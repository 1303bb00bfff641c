//! Property-based tests for the token scanner, artifact naming and the
//! effective POM parser.

use pomcheck::compliance::forbidden::TokenMatcher;
use pomcheck::config::ForbiddenToken;
use pomcheck::model::{ArtifactCoordinates, ArtifactKind};
use pomcheck::EffectivePom;
use proptest::prelude::*;

fn coordinates(packaging: &str, artifact_id: &str, version: &str) -> ArtifactCoordinates {
    ArtifactCoordinates {
        packaging: packaging.to_string(),
        artifact_id: artifact_id.to_string(),
        version: version.to_string(),
        final_name: format!("{artifact_id}-{version}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn inserted_token_is_found_on_its_line(
        text in "[ -~\n]{0,200}",
        token in "[a-z0-9.]{3,20}",
        at in 0usize..=200,
    ) {
        let at = at.min(text.len());
        let pom = format!("{}{}{}", &text[..at], token, &text[at..]);
        let line = text[..at].matches('\n').count() + 1;

        let matcher = TokenMatcher::new(&ForbiddenToken::new(token.clone())).unwrap();
        prop_assert!(matcher.matching_lines(&pom).contains(&line));
        prop_assert!(matcher.check(&pom).is_fail());
    }

    #[test]
    fn case_insensitive_token_matches_any_case(
        prefix in "[A-Z0-9 <>/:]{0,40}",
        token in "[a-z]{3,20}",
    ) {
        let pom = format!("{prefix}{}\n", token.to_uppercase());
        let matcher =
            TokenMatcher::new(&ForbiddenToken::new(token.clone()).case_insensitive()).unwrap();
        prop_assert!(matcher.check(&pom).is_fail());

        let exact = TokenMatcher::new(&ForbiddenToken::new(token)).unwrap();
        prop_assert_eq!(exact.matching_lines(&pom).len(), 0);
    }

    #[test]
    fn text_without_token_passes(
        text in "[A-Z <>/\n]{0,200}",
        token in "[a-z0-9.]{1,20}",
    ) {
        let matcher = TokenMatcher::new(&ForbiddenToken::new(token)).unwrap();
        prop_assert!(matcher.check(&text).is_pass());
    }

    #[test]
    fn regex_metacharacters_are_literal(token in "[.*+?()\\[\\]{}|^$\\\\]{1,10}") {
        let matcher = TokenMatcher::new(&ForbiddenToken::new(token.clone())).unwrap();
        let wrapped = format!("<url>{token}</url>");
        prop_assert!(matcher.check(&wrapped).is_fail());
        prop_assert!(matcher.check("<url>plain</url>").is_pass());
    }

    #[test]
    fn packaged_module_expects_five_files(
        packaging in prop_oneof![Just("jar"), Just("war"), Just("bundle"), Just("maven-plugin")],
        artifact_id in "[a-z][a-z0-9-]{0,15}",
        version in "[0-9]{1,2}\\.[0-9]{1,3}(-SNAPSHOT)?",
    ) {
        let coords = coordinates(packaging, &artifact_id, &version);
        let expected = coords.expected_artifacts();

        prop_assert_eq!(expected.len(), 5);
        prop_assert_eq!(&expected[0].file_name, &format!("{artifact_id}-{version}.jar"));
        prop_assert_eq!(expected[3].kind, ArtifactKind::SbomJson);
        prop_assert_eq!(expected[4].kind, ArtifactKind::SbomXml);
        prop_assert!(expected[3].file_name.ends_with("-bom.json"));
        prop_assert!(expected[4].file_name.ends_with("-bom.xml"));
    }

    #[test]
    fn aggregator_expects_only_sboms(
        artifact_id in "[a-z][a-z0-9-]{0,15}",
        version in "[0-9]{1,2}\\.[0-9]{1,3}",
    ) {
        let coords = coordinates("pom", &artifact_id, &version);
        let names: Vec<String> = coords
            .expected_artifacts()
            .into_iter()
            .map(|a| a.file_name)
            .collect();

        prop_assert_eq!(
            names,
            vec![
                format!("{artifact_id}-{version}-bom.json"),
                format!("{artifact_id}-{version}-bom.xml"),
            ]
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn effective_pom_parse_doesnt_panic(s in "\\PC{0,300}") {
        let _ = EffectivePom::parse(&s);
    }

    #[test]
    fn effective_pom_keeps_every_email(emails in prop::collection::vec("[a-z]{1,8}@[a-z]{1,8}\\.org", 1..5)) {
        let developers: String = emails
            .iter()
            .map(|e| format!("<developer><email>{e}</email></developer>"))
            .collect();
        let xml = format!("<project><developers>{developers}</developers></project>");

        let pom = EffectivePom::parse(&xml).unwrap();
        prop_assert_eq!(pom.values("developers/developer/email"), emails.as_slice());
    }
}
