//! Scenario 5 (wrong-key) from spec.md §8, plus the analogous
//! wrong-name and wrong-generator-vector substitutions: verifying with
//! any single piece of the wrong key material must reject, even when
//! everything else is taken from the honest run.

mod common;
use common::assertions::assert_verify_fails;
use common::fixtures::{create_test_data, write_temp_file, ScenarioSetup};

use por_crypto::api::PorSystem;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn verifying_with_a_different_public_key_is_rejected() {
    let data = create_test_data(64, 3);
    let file = write_temp_file(&data);
    let dir = std::env::temp_dir().join(format!("por-wrongkey-{}", std::process::id()));
    let system = PorSystem::new(&dir, 8);

    let mut rng = StdRng::seed_from_u64(3);
    let km_a = system.setup(&mut rng).unwrap();
    let km_b = system.setup(&mut rng).unwrap();
    assert_ne!(km_a.pk.0, km_b.pk.0);

    let tags = system.sign(&file, &km_a).unwrap();
    let n = tags.len() as u64;
    let q = system.challenge(n, 5, &mut rng).unwrap();
    let proof = system.prove(&q, &tags, &file).unwrap();

    let verified = system
        .verify(&km_b.pk, &km_a.name, &km_a.u, &q, &proof)
        .unwrap();
    assert_verify_fails(ScenarioSetup {
        km: km_a,
        file,
        tags,
        challenges: q,
        proof,
        verified,
        s: 8,
    });

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn verifying_with_a_different_file_name_is_rejected() {
    let data = create_test_data(64, 13);
    let file = write_temp_file(&data);
    let dir = std::env::temp_dir().join(format!("por-wrongname-{}", std::process::id()));
    let system = PorSystem::new(&dir, 8);

    let mut rng = StdRng::seed_from_u64(13);
    let km_a = system.setup(&mut rng).unwrap();
    let km_b = system.setup(&mut rng).unwrap();
    assert_ne!(km_a.name.0, km_b.name.0);

    let tags = system.sign(&file, &km_a).unwrap();
    let n = tags.len() as u64;
    let q = system.challenge(n, 5, &mut rng).unwrap();
    let proof = system.prove(&q, &tags, &file).unwrap();

    let verified = system
        .verify(&km_a.pk, &km_b.name, &km_a.u, &q, &proof)
        .unwrap();
    assert_verify_fails(ScenarioSetup {
        km: km_a,
        file,
        tags,
        challenges: q,
        proof,
        verified,
        s: 8,
    });

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn verifying_with_a_different_generator_vector_is_rejected() {
    let data = create_test_data(64, 21);
    let file = write_temp_file(&data);
    let dir = std::env::temp_dir().join(format!("por-wrongu-{}", std::process::id()));
    let system = PorSystem::new(&dir, 8);

    let mut rng = StdRng::seed_from_u64(21);
    let km_a = system.setup(&mut rng).unwrap();
    let km_b = system.setup(&mut rng).unwrap();
    assert_ne!(km_a.u.0, km_b.u.0);

    let tags = system.sign(&file, &km_a).unwrap();
    let n = tags.len() as u64;
    let q = system.challenge(n, 5, &mut rng).unwrap();
    let proof = system.prove(&q, &tags, &file).unwrap();

    let verified = system
        .verify(&km_a.pk, &km_a.name, &km_b.u, &q, &proof)
        .unwrap();
    assert_verify_fails(ScenarioSetup {
        km: km_a,
        file,
        tags,
        challenges: q,
        proof,
        verified,
        s: 8,
    });

    let _ = std::fs::remove_dir_all(&dir);
}
