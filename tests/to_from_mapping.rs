//! Round trips through ordered field mappings.

mod common;

use common::{Convention, SYNTHETIC};
use cosmology_io::{
    CosmologyError,
    Kwargs,
    io::{Mapping, from_mapping, to_mapping},
    realizations,
};
use cosmology_io_testing::{
    ConverterFunctions,
    DirectCallFixtures,
    DispatchFixtures,
    IoFixtures,
    RoundTripSuite,
    SyntheticClassGuard,
    TestResult,
    cosmo_cases,
};
use rstest::{fixture, rstest};
use serde_json::Value;

const FORMAT: &str = "mapping";

#[fixture]
fn setup() -> SyntheticClassGuard { common::install_synthetic("TestToFromMapping") }

fn direct(setup: &SyntheticClassGuard) -> DirectCallFixtures<Mapping> {
    DirectCallFixtures::new(ConverterFunctions::new(to_mapping, from_mapping), setup.registry())
}

#[rstest]
fn round_trip(
    setup: SyntheticClassGuard,
    #[values(
        "WMAP1", "WMAP3", "WMAP5", "WMAP7", "WMAP9", "Planck13", "Planck15", "Planck18", SYNTHETIC
    )]
    case: &str,
) -> TestResult {
    let cosmo = common::resolve(&setup, case)?;
    common::round_trip(&DispatchFixtures::new(setup.registry()), &cosmo, FORMAT)?;
    common::round_trip(&direct(&setup), &cosmo, FORMAT)
}

#[rstest]
#[case("WMAP3")]
#[case(SYNTHETIC)]
fn class_keyword_is_checked(setup: SyntheticClassGuard, #[case] case: &str) -> TestResult {
    let cosmo = common::resolve(&setup, case)?;
    let dispatch = DispatchFixtures::new(setup.registry());
    common::decode_with_matching_class(&dispatch, &cosmo, FORMAT)?;
    common::decode_with_other_class_fails(&dispatch, &cosmo, FORMAT)?;
    common::decode_with_matching_class(&direct(&setup), &cosmo, FORMAT)?;
    common::decode_with_other_class_fails(&direct(&setup), &cosmo, FORMAT)
}

#[rstest]
fn unknown_keywords_are_rejected(setup: SyntheticClassGuard) -> TestResult {
    let cosmo = common::resolve(&setup, "Planck13")?;
    let dispatch = DispatchFixtures::new(setup.registry());
    common::decode_rejects_unknown_keyword(&dispatch, &cosmo, FORMAT)?;
    common::encode_rejects_unknown_keyword(&dispatch, &cosmo, FORMAT)?;
    common::decode_rejects_unknown_keyword(&direct(&setup), &cosmo, FORMAT)?;
    common::encode_rejects_unknown_keyword(&direct(&setup), &cosmo, FORMAT)
}

#[rstest]
fn mapping_lists_class_name_parameters_then_meta(setup: SyntheticClassGuard) -> TestResult {
    let cosmo = common::resolve(&setup, "Planck18")?;
    let fixtures = direct(&setup);
    let mapping = fixtures.to_format(&cosmo)(fixtures.encode_kwargs(FORMAT))?;

    let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
    let mut expected = vec!["cosmology", "name"];
    expected.extend(cosmo.parameters().map(|(name, _)| name));
    expected.push("meta");
    assert_eq!(keys, expected);
    assert_eq!(mapping["cosmology"], Value::from(realizations::FLAT_LAMBDA_CDM));
    assert_eq!(mapping["name"], Value::from("Planck18"));
    Ok(())
}

#[rstest]
#[case("Planck18")]
#[case("WMAP9")]
fn flattened_meta_returns_to_meta(setup: SyntheticClassGuard, #[case] case: &str) -> TestResult {
    let cosmo = common::resolve(&setup, case)?;
    let mapping = to_mapping(&cosmo, Kwargs::new().with("move_from_meta", true))?;
    assert!(!mapping.contains_key("meta"));
    for key in cosmo.meta().keys() {
        assert!(mapping.contains_key(key), "{key} not flattened");
    }

    let err = from_mapping(setup.registry(), mapping.clone(), Kwargs::new())
        .expect_err("flattened meta is not a parameter");
    assert!(matches!(err, CosmologyError::UnexpectedKeyword { .. }), "{err}");

    let decoded = from_mapping(
        setup.registry(),
        mapping,
        Kwargs::new().with("move_to_meta", true),
    )?;
    assert_eq!(decoded, cosmo);
    assert_eq!(decoded.meta(), cosmo.meta());
    Ok(())
}

#[rstest]
fn synthetic_class_keeps_extra_fields_out_of_meta(setup: SyntheticClassGuard) -> TestResult {
    let cosmo = common::resolve(&setup, SYNTHETIC)?;
    let mut mapping = to_mapping(&cosmo, Kwargs::new())?;
    mapping.insert("extra".to_owned(), Value::from(1));

    let decoded = from_mapping(
        setup.registry(),
        mapping,
        Kwargs::new().with("move_to_meta", true),
    )?;
    assert_eq!(decoded, cosmo);
    assert!(decoded.meta().is_empty());
    Ok(())
}

#[rstest]
fn every_case_round_trips(setup: SyntheticClassGuard) -> TestResult {
    let cases = cosmo_cases(setup.qualname())?;
    let count = cases.len();
    let report = RoundTripSuite::new(direct(&setup), cases.clone())
        .decode_with(Kwargs::format(FORMAT))
        .run()?;
    assert_eq!(report.checked.len(), count);

    let report = RoundTripSuite::new(DispatchFixtures::new(setup.registry()), cases)
        .encode_with(Kwargs::format(FORMAT))
        .decode_with(Kwargs::format(FORMAT))
        .run()?;
    assert_eq!(report.checked.len(), count);
    Ok(())
}
