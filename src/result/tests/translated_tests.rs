//! Unit tests for [`TranslatedResult`].

use rstest::rstest;

use super::fixtures::{
    UnavailableTranslator, french_translator, invalid, nested_aggregate, range_failure,
};
use crate::result::{
    adapters::memory::InMemoryTranslator,
    decorators::{ObscuredResult, TranslatedResult},
    domain::{BasicResult, MessageVariables, ResultAggregate, variables},
    ports::{
        result::{MessageSource, ValidationResult},
        translator::TranslatorError,
    },
};

#[rstest]
fn translation_happens_before_interpolation() {
    let translator = InMemoryTranslator::new().with_translation(None, "X", "Y");
    let inner = invalid("abc", &["X"], variables([("n", 1)]));

    let translated = TranslatedResult::new(&inner, &translator);
    assert_eq!(translated.messages().expect("translation"), vec!["Y"]);
}

#[rstest]
fn translated_placeholders_are_interpolated(
    range_failure: BasicResult,
    french_translator: InMemoryTranslator,
) {
    let translated = TranslatedResult::new(&range_failure, &french_translator);
    assert_eq!(
        translated.messages().expect("translation"),
        vec!["'12' n'est pas entre '1' et '10'"]
    );
}

#[rstest]
fn text_domain_selects_the_catalog(french_translator: InMemoryTranslator) {
    let inner = invalid("", &["Required"], MessageVariables::new());

    let default_domain = TranslatedResult::new(&inner, &french_translator);
    assert_eq!(default_domain.messages().expect("translation"), vec!["Required"]);

    let forms = TranslatedResult::new(&inner, &french_translator).with_text_domain("forms");
    assert_eq!(forms.text_domain(), Some("forms"));
    assert_eq!(forms.messages().expect("translation"), vec!["Obligatoire"]);
}

#[rstest]
fn aggregates_are_translated_per_leaf(nested_aggregate: ResultAggregate) {
    let translator = InMemoryTranslator::new()
        .with_translation(None, "a", "A")
        .with_translation(None, "c", "C");

    let translated = TranslatedResult::new(&nested_aggregate, translator);
    assert_eq!(
        translated.messages().expect("translation"),
        vec!["A", "b", "C"]
    );
}

#[rstest]
fn aggregate_leaves_interpolate_their_own_values(french_translator: InMemoryTranslator) {
    let mut aggregate = ResultAggregate::new("whole");
    aggregate.push(invalid("first", &["'%value%' is too long"], MessageVariables::new()));
    aggregate.push(invalid("second", &["'%value%' is too long"], MessageVariables::new()));

    let translated = TranslatedResult::new(&aggregate, &french_translator);
    assert_eq!(
        translated.messages().expect("translation"),
        vec!["'first' est trop long", "'second' est trop long"]
    );
}

#[rstest]
fn translator_errors_propagate_unchanged(range_failure: BasicResult) {
    let translated = TranslatedResult::new(&range_failure, UnavailableTranslator);
    let error = translated.messages().expect_err("backend is down");
    assert!(matches!(error, TranslatorError::Backend(_)));
    assert!(error.to_string().contains("catalog service unavailable"));
}

#[rstest]
fn strict_translator_misses_surface(range_failure: BasicResult) {
    let translated = TranslatedResult::new(&range_failure, InMemoryTranslator::strict())
        .with_text_domain("forms");
    let error = translated.messages().expect_err("no catalog entry");
    assert!(matches!(
        error,
        TranslatorError::MissingTranslation { ref text_domain, .. }
            if text_domain.as_deref() == Some("forms")
    ));
}

#[rstest]
fn valid_results_never_call_the_translator() {
    let translated = TranslatedResult::new(BasicResult::valid("ok"), UnavailableTranslator);
    assert!(translated.is_valid());
    assert!(translated.messages().expect("no templates").is_empty());
}

#[rstest]
fn other_members_proxy_to_the_inner_result(
    range_failure: BasicResult,
    french_translator: InMemoryTranslator,
) {
    let translated = TranslatedResult::new(&range_failure, &french_translator);
    assert!(!translated.is_valid());
    assert_eq!(*translated.value(), *range_failure.value());
    assert_eq!(
        translated.message_templates(),
        range_failure.message_templates()
    );
    assert_eq!(
        translated.message_variables(),
        range_failure.message_variables()
    );
    assert_eq!(translated.inner().templates(), range_failure.templates());
}

#[rstest]
fn translating_an_obscured_result_keeps_the_mask(
    range_failure: BasicResult,
    french_translator: InMemoryTranslator,
) {
    let view = TranslatedResult::new(ObscuredResult::new(&range_failure), &french_translator);
    assert_eq!(
        view.messages().expect("translation"),
        vec!["'**' n'est pas entre '1' et '10'"]
    );
}

#[rstest]
fn translated_results_can_be_aggregated(french_translator: InMemoryTranslator) {
    let mut aggregate = ResultAggregate::new("abc");
    aggregate.push(TranslatedResult::new(
        invalid("abc", &["'%value%' is too long"], MessageVariables::new()),
        french_translator,
    ));
    aggregate.push(invalid("abc", &["untranslated"], MessageVariables::new()));

    assert_eq!(
        aggregate.messages().expect("translation"),
        vec!["'abc' est trop long", "untranslated"]
    );
}

#[rstest]
fn outer_translation_keeps_child_translations() {
    let german = InMemoryTranslator::new().with_translation(None, "bad", "schlecht");
    let french = InMemoryTranslator::strict().with_translation(None, "worse", "pire");

    let mut aggregate = ResultAggregate::new("abc");
    aggregate.push(TranslatedResult::new(
        invalid("abc", &["bad"], MessageVariables::new()),
        german,
    ));
    aggregate.push(invalid("abc", &["worse"], MessageVariables::new()));

    let view = TranslatedResult::new(&aggregate, &french);
    assert_eq!(view.messages().expect("translation"), vec!["schlecht", "pire"]);
}

#[rstest]
fn sources_expose_translated_templates(
    range_failure: BasicResult,
    french_translator: InMemoryTranslator,
) {
    let translated = TranslatedResult::new(&range_failure, &french_translator);
    let sources = translated.message_sources().expect("translation");

    assert_eq!(sources.len(), 1);
    assert!(sources.iter().all(MessageSource::is_translated));
    assert_eq!(
        sources.first().map(|source| source.templates().to_vec()),
        Some(vec!["'%value%' n'est pas entre '%min%' et '%max%'".to_owned()])
    );
}
