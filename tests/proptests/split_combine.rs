//! Property tests for split/combine workflows

use primeshare::domain::SplitConfig;
use primeshare::{EncodedShare, Error, combine, split_with_rng};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Wrapper for secrets that fit the field and have no leading zero byte,
/// so they survive the integer round trip byte for byte
#[derive(Clone, Debug)]
struct Secret(Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 160; // 0..=159
        let mut bytes: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
        if let Some(first) = bytes.first_mut() {
            if *first == 0 {
                *first = 1;
            }
        }
        Secret(bytes)
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: u8,
    num_shares: u8,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Generate share count between 1 and 20 (keep it reasonable for testing)
        let num_shares = (u8::arbitrary(g) % 20) + 1; // 1..=20

        // Generate threshold between 1 and num_shares
        let threshold = (u8::arbitrary(g) % num_shares) + 1; // 1..=num_shares

        ValidShamirParams {
            threshold,
            num_shares,
        }
    }
}

impl ValidShamirParams {
    fn config(self) -> SplitConfig {
        SplitConfig::from_counts(self.num_shares.into(), self.threshold.into())
            .unwrap_or_else(|_| unreachable!("generator only yields valid pairs"))
    }
}

fn deal(secret: &Secret, params: ValidShamirParams, seed: u64) -> Vec<EncodedShare> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    split_with_rng(&secret.0, params.config(), &mut rng).unwrap()
}

fn shuffled(shares: &[EncodedShare], seed: u64) -> Vec<EncodedShare> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut shares = shares.to_vec();
    shares.shuffle(&mut rng);
    shares
}

/// Test that splitting and combining the first threshold shares recovers the secret
#[quickcheck]
fn prop_split_combine_round_trip(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let shares = deal(&secret, params, seed);

    if shares.len() != params.num_shares as usize {
        return false;
    }

    let Ok(recovered) = combine(&shares[..params.threshold as usize]) else {
        return false;
    };
    *recovered == secret.0
}

/// Test that random selections of threshold shares work in any order
#[quickcheck]
fn prop_random_share_selection_works(
    secret: Secret,
    params: ValidShamirParams,
    seed: u64,
    selection_seed: u64,
) -> bool {
    let shares = deal(&secret, params, seed);
    let selected: Vec<_> = shuffled(&shares, selection_seed)
        .into_iter()
        .take(params.threshold as usize)
        .collect();

    combine(&selected).is_ok_and(|recovered| *recovered == secret.0)
}

/// Test that any number of shares at or above the threshold recovers the secret
#[quickcheck]
fn prop_superset_stability(
    secret: Secret,
    params: ValidShamirParams,
    seed: u64,
    extra: u8,
) -> bool {
    let shares = deal(&secret, params, seed);
    let spare = params.num_shares - params.threshold;
    let count = params.threshold + if spare == 0 { 0 } else { extra % (spare + 1) };
    let selected = shuffled(&shares, seed.wrapping_add(1));

    combine(&selected[..count as usize]).is_ok_and(|recovered| *recovered == secret.0)
}

/// Test that one share fewer than the threshold returns a wrong value without error
#[quickcheck]
fn prop_insufficient_shares_give_wrong_secret(
    secret: Secret,
    params: ValidShamirParams,
    seed: u64,
) -> bool {
    // One share of a threshold-2 split is still a valid (wrong) answer, but
    // zero shares is an error, so start at threshold 2
    if params.threshold < 2 {
        return true;
    }

    let shares = deal(&secret, params, seed);
    let insufficient_count = (params.threshold - 1) as usize;

    match combine(&shares[..insufficient_count]) {
        Ok(recovered) => *recovered != secret.0,
        Err(_) => false,
    }
}

/// Test that shares from different secrets don't combine correctly
#[quickcheck]
fn prop_mixed_shares_fail(
    secret1: Secret,
    secret2: Secret,
    params: ValidShamirParams,
    seed: u64,
) -> bool {
    // Mixing needs at least one share from each split
    if secret1.0 == secret2.0 || params.threshold < 2 {
        return true;
    }

    let shares1 = deal(&secret1, params, seed);
    let shares2 = deal(&secret2, params, seed.wrapping_add(1));

    // Take indices 1..=half from the first split and the rest from the second
    let half = (params.threshold as usize) / 2;
    let mut mixed = Vec::new();
    mixed.extend(shares1.iter().take(half).cloned());
    mixed.extend(
        shares2
            .iter()
            .skip(half)
            .take(params.threshold as usize - half)
            .cloned(),
    );

    match combine(&mixed) {
        Err(_) => true,
        Ok(recovered) => *recovered != secret1.0 && *recovered != secret2.0,
    }
}

/// Test that repeating any share is rejected
#[quickcheck]
fn prop_duplicate_index_rejected(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let shares = deal(&secret, params, seed);
    let pick = (seed % u64::from(params.num_shares)) as usize;

    let mut with_duplicate = shares.clone();
    with_duplicate.push(shares[pick].clone());

    let expected_index = u32::try_from(pick + 1).unwrap_or_else(|_| unreachable!("pick < 20"));
    combine(&with_duplicate) == Err(Error::DuplicateIndex(expected_index))
}
