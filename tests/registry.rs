//! Tests for the process-wide class and format registries.
//!
//! The global tables are shared by every test in this binary, so tests that
//! mutate them run serially.

use cosmology_io::{
    ClassRegistry,
    ConverterPair,
    Cosmology,
    CosmologyClass,
    CosmologyError,
    FormatRegistry,
    Kwargs,
    Payload,
    io::{from_yaml, to_yaml},
    realizations,
};
use cosmology_io_testing::{SyntheticClassGuard, TestResult, cosmology_with_kwargs, registry};
use rstest::rstest;
use serial_test::serial;

#[rstest]
#[serial]
fn global_registry_holds_the_builtin_classes() {
    let registry = ClassRegistry::global();
    for qualname in [
        realizations::FLAT_LAMBDA_CDM,
        realizations::LAMBDA_CDM,
        realizations::FLAT_W_CDM,
    ] {
        assert!(registry.contains(qualname), "{qualname} missing");
    }
}

#[rstest]
#[serial]
fn synthetic_class_is_scoped_to_its_guard() -> TestResult {
    let registry = ClassRegistry::global();
    let before = registry.names();
    let qualname = {
        let guard = SyntheticClassGuard::install(registry, "TestGlobalRegistry")?;
        let cosmo = guard.case().resolve(registry)?;
        let payload = cosmo.to_format(Kwargs::format("yaml"))?;
        let decoded = Cosmology::from_format(registry, payload, Kwargs::format("yaml"))?;
        assert_eq!(decoded, cosmo);
        guard.qualname().to_owned()
    };
    assert!(!registry.contains(&qualname));
    assert_eq!(registry.names(), before);
    Ok(())
}

#[rstest]
#[serial]
fn reinstalling_after_teardown_succeeds() -> TestResult {
    let registry = ClassRegistry::global();
    for _ in 0..2 {
        let guard = SyntheticClassGuard::install(registry, "TestReinstall")?;
        assert!(registry.contains(guard.qualname()));
    }
    Ok(())
}

#[rstest]
fn conflicting_declaration_is_refused(registry: ClassRegistry) -> TestResult {
    let guard = SyntheticClassGuard::install(&registry, "TestConflict")?;
    registry.register(cosmology_with_kwargs(guard.qualname()))?;

    let imposter = CosmologyClass::builder(guard.qualname()).build();
    let err = registry.register(imposter).expect_err("different class under the same name");
    assert!(matches!(err, CosmologyError::DuplicateClass(_)), "{err}");
    assert!(registry.contains(guard.qualname()));
    Ok(())
}

#[rstest]
#[serial]
fn global_format_registry_lists_builtins_and_accepts_new_formats() -> TestResult {
    let formats = FormatRegistry::global();
    for builtin in ["astropy.row", "bincode", "json", "mapping", "yaml"] {
        assert!(formats.formats().iter().any(|format| format == builtin));
    }

    let pair = ConverterPair {
        to: |cosmo, kwargs| to_yaml(cosmo, kwargs).map(Payload::Yaml),
        from: |registry, payload, kwargs| match payload {
            Payload::Yaml(text) => from_yaml(registry, text, kwargs),
            other => Err(CosmologyError::FormatMismatch {
                requested: "test.yml".to_owned(),
                actual: other.format().to_string(),
            }),
        },
    };
    formats.register("test.yml", pair)?;
    let err = formats.register("test.yml", pair).expect_err("identifier taken");
    assert!(matches!(err, CosmologyError::DuplicateFormat(_)), "{err}");

    let planck = realizations::get("Planck18")?;
    let payload = planck.to_format(Kwargs::format("test.yml"))?;
    let decoded = Cosmology::from_format(
        ClassRegistry::global(),
        payload,
        Kwargs::format("test.yml"),
    )?;
    assert_eq!(decoded, planck);
    Ok(())
}
