//! Bit-exact binary encoding of every PoR artifact.
//!
//! Every record is fixed-width, little-endian, and host-independent, per
//! spec.md §4.1. Group elements are encoded as their literal projective
//! Jacobian-style coordinates (X, Y, Z over Fq for G1; X, Y, Z over Fq2
//! for G2) by serializing each coordinate field element directly, rather
//! than going through an affine round trip — this is what makes the wire
//! format match "three field elements X, Y, Z of Fq" in spec.md exactly,
//! independent of whatever affine-forwarding a generic group
//! (de)serialization might otherwise choose.
//!
//! Deserialization always re-derives the affine form to run the curve
//! library's on-curve and subgroup checks before accepting a point.

use crate::curve::{Fr, G1, G2};
use crate::error::{PorError, Result};
use ark_ec::short_weierstrass::Projective;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Fp2, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};

/// Canonical width of a serialized Fr or Fq element on BN-254.
pub const FIELD_BYTES: usize = 32;

/// Width of a serialized G1 record: three Fq coordinates.
pub const G1_BYTES: usize = FIELD_BYTES * 3;

/// Width of a serialized G2 record: three Fq2 coordinates, each two Fq.
pub const G2_BYTES: usize = FIELD_BYTES * 2 * 3;

/// Width of one (index, weight) challenge pair: u64 index + u32 weight.
pub const CHALLENGE_PAIR_BYTES: usize = 8 + 4;

/// Width of one little-endian μ_j component.
pub const MU_COMPONENT_BYTES: usize = 4;

fn encode_field<F: CanonicalSerialize>(value: &F) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FIELD_BYTES);
    value
        .serialize_with_mode(&mut buf, Compress::No)
        .expect("serializing a field element into an in-memory buffer cannot fail");
    debug_assert_eq!(buf.len(), FIELD_BYTES);
    buf
}

fn decode_field<F: CanonicalDeserialize>(bytes: &[u8], record: &'static str) -> Result<F> {
    if bytes.len() != FIELD_BYTES {
        return Err(PorError::decode(
            record,
            format!(
                "expected {} bytes for a field element, got {}",
                FIELD_BYTES,
                bytes.len()
            ),
        ));
    }
    F::deserialize_with_mode(bytes, Compress::No, Validate::Yes)
        .map_err(|e| PorError::decode(record, e.to_string()))
}

/// Encodes an Fr scalar (32 bytes, canonical little-endian).
pub fn encode_fr(value: &Fr) -> [u8; FIELD_BYTES] {
    let v = encode_field(value);
    let mut out = [0u8; FIELD_BYTES];
    out.copy_from_slice(&v);
    out
}

/// Decodes an Fr scalar. Rejects input whose length is not exactly
/// [`FIELD_BYTES`] or whose value is not canonically reduced mod r.
pub fn decode_fr(bytes: &[u8]) -> Result<Fr> {
    decode_field(bytes, "Fr")
}

fn fq_coords_of_g1(p: &G1) -> (ark_bn254::Fq, ark_bn254::Fq, ark_bn254::Fq) {
    (p.x, p.y, p.z)
}

fn fq2_coords_of_g2(p: &G2) -> (ark_bn254::Fq2, ark_bn254::Fq2, ark_bn254::Fq2) {
    (p.x, p.y, p.z)
}

/// Encodes a G1 point as its three raw Fq Jacobian coordinates.
pub fn encode_g1(point: &G1) -> [u8; G1_BYTES] {
    let (x, y, z) = fq_coords_of_g1(point);
    let mut out = [0u8; G1_BYTES];
    out[0..FIELD_BYTES].copy_from_slice(&encode_field(&x));
    out[FIELD_BYTES..2 * FIELD_BYTES].copy_from_slice(&encode_field(&y));
    out[2 * FIELD_BYTES..3 * FIELD_BYTES].copy_from_slice(&encode_field(&z));
    out
}

/// Decodes a G1 point from its three raw Fq coordinates, re-deriving the
/// affine form to reject off-curve or wrong-subgroup input.
pub fn decode_g1(bytes: &[u8]) -> Result<G1> {
    if bytes.len() != G1_BYTES {
        return Err(PorError::decode(
            "G1",
            format!("expected {} bytes, got {}", G1_BYTES, bytes.len()),
        ));
    }
    let x: ark_bn254::Fq = decode_field(&bytes[0..FIELD_BYTES], "G1.x")?;
    let y: ark_bn254::Fq = decode_field(&bytes[FIELD_BYTES..2 * FIELD_BYTES], "G1.y")?;
    let z: ark_bn254::Fq = decode_field(&bytes[2 * FIELD_BYTES..3 * FIELD_BYTES], "G1.z")?;
    let candidate: G1 = Projective { x, y, z };
    validate_on_curve_g1(candidate)
}

fn validate_on_curve_g1(candidate: G1) -> Result<G1> {
    let affine = candidate.into_affine();
    if !affine.is_zero() && !(affine.is_on_curve() && affine.is_in_correct_subgroup_assuming_on_curve())
    {
        return Err(PorError::decode("G1", "point is not on curve"));
    }
    Ok(candidate)
}

fn encode_fq2(value: &Fp2<ark_bn254::Fq2Config>) -> [u8; 2 * FIELD_BYTES] {
    let mut out = [0u8; 2 * FIELD_BYTES];
    out[0..FIELD_BYTES].copy_from_slice(&encode_field(&value.c0));
    out[FIELD_BYTES..2 * FIELD_BYTES].copy_from_slice(&encode_field(&value.c1));
    out
}

fn decode_fq2(bytes: &[u8], record: &'static str) -> Result<ark_bn254::Fq2> {
    let c0: ark_bn254::Fq = decode_field(&bytes[0..FIELD_BYTES], record)?;
    let c1: ark_bn254::Fq = decode_field(&bytes[FIELD_BYTES..2 * FIELD_BYTES], record)?;
    Ok(Fp2::new(c0, c1))
}

/// Encodes a G2 point as its three raw Fq2 Jacobian coordinates.
pub fn encode_g2(point: &G2) -> [u8; G2_BYTES] {
    let (x, y, z) = fq2_coords_of_g2(point);
    let mut out = [0u8; G2_BYTES];
    out[0..2 * FIELD_BYTES].copy_from_slice(&encode_fq2(&x));
    out[2 * FIELD_BYTES..4 * FIELD_BYTES].copy_from_slice(&encode_fq2(&y));
    out[4 * FIELD_BYTES..6 * FIELD_BYTES].copy_from_slice(&encode_fq2(&z));
    out
}

/// Decodes a G2 point, re-deriving the affine form to reject off-curve or
/// wrong-subgroup input.
pub fn decode_g2(bytes: &[u8]) -> Result<G2> {
    if bytes.len() != G2_BYTES {
        return Err(PorError::decode(
            "G2",
            format!("expected {} bytes, got {}", G2_BYTES, bytes.len()),
        ));
    }
    let x = decode_fq2(&bytes[0..2 * FIELD_BYTES], "G2.x")?;
    let y = decode_fq2(&bytes[2 * FIELD_BYTES..4 * FIELD_BYTES], "G2.y")?;
    let z = decode_fq2(&bytes[4 * FIELD_BYTES..6 * FIELD_BYTES], "G2.z")?;
    let candidate: G2 = Projective { x, y, z };
    let affine = candidate.into_affine();
    if !affine.is_zero() && !(affine.is_on_curve() && affine.is_in_correct_subgroup_assuming_on_curve())
    {
        return Err(PorError::decode("G2", "point is not on curve"));
    }
    Ok(candidate)
}

/// Encodes an ordered slice of G1 points at a fixed stride ([`G1_BYTES`]
/// each), so random access to element `i` is `seek(i * G1_BYTES)`.
pub fn encode_g1_vec(points: &[G1]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(points.len() * G1_BYTES);
    for p in points {
        buf.extend_from_slice(&encode_g1(p));
    }
    buf
}

/// Decodes a stride-encoded vector of `count` G1 points.
pub fn decode_g1_vec(bytes: &[u8], count: usize) -> Result<Vec<G1>> {
    if bytes.len() != count * G1_BYTES {
        return Err(PorError::decode(
            "G1Vec",
            format!(
                "expected {} bytes for {} points, got {}",
                count * G1_BYTES,
                count,
                bytes.len()
            ),
        ));
    }
    (0..count)
        .map(|i| decode_g1(&bytes[i * G1_BYTES..(i + 1) * G1_BYTES]))
        .collect()
}

/// Reads a single G1 record at index `i` out of a stride-encoded buffer,
/// the O(1) random-access primitive the Prover uses against the tag
/// stream.
pub fn decode_g1_at(bytes: &[u8], index: usize) -> Result<G1> {
    let start = index * G1_BYTES;
    let end = start + G1_BYTES;
    if end > bytes.len() {
        return Err(PorError::decode(
            "G1Vec",
            format!("index {} out of range ({} bytes available)", index, bytes.len()),
        ));
    }
    decode_g1(&bytes[start..end])
}

/// A single (block index, weight) challenge pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengePair {
    pub index: u64,
    pub nu: u32,
}

/// Encodes the challenge-record: `c` concatenated (u64 LE index, u32 LE
/// weight) pairs, in generation order.
pub fn encode_challenges(pairs: &[ChallengePair]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(pairs.len() * CHALLENGE_PAIR_BYTES);
    for pair in pairs {
        buf.extend_from_slice(&pair.index.to_le_bytes());
        buf.extend_from_slice(&pair.nu.to_le_bytes());
    }
    buf
}

/// Decodes a challenge-record of exactly `count` pairs.
pub fn decode_challenges(bytes: &[u8], count: usize) -> Result<Vec<ChallengePair>> {
    if bytes.len() != count * CHALLENGE_PAIR_BYTES {
        return Err(PorError::decode(
            "ChallengeSet",
            format!(
                "expected {} bytes for {} pairs, got {}",
                count * CHALLENGE_PAIR_BYTES,
                count,
                bytes.len()
            ),
        ));
    }
    let mut out = Vec::with_capacity(count);
    for chunk in bytes.chunks_exact(CHALLENGE_PAIR_BYTES) {
        let index = u64::from_le_bytes(chunk[0..8].try_into().unwrap());
        let nu = u32::from_le_bytes(chunk[8..12].try_into().unwrap());
        out.push(ChallengePair { index, nu });
    }
    Ok(out)
}

/// Encodes the mu-record: `s` concatenated little-endian u32 components.
pub fn encode_mu(mu: &[u32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(mu.len() * MU_COMPONENT_BYTES);
    for component in mu {
        buf.extend_from_slice(&component.to_le_bytes());
    }
    buf
}

/// Decodes a mu-record of exactly `s` components.
pub fn decode_mu(bytes: &[u8], s: usize) -> Result<Vec<u32>> {
    if bytes.len() != s * MU_COMPONENT_BYTES {
        return Err(PorError::decode(
            "Mu",
            format!(
                "expected {} bytes for s={}, got {}",
                s * MU_COMPONENT_BYTES,
                s,
                bytes.len()
            ),
        ));
    }
    Ok(bytes
        .chunks_exact(MU_COMPONENT_BYTES)
        .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
        .collect())
}

/// Converts an unsigned byte into its Fr embedding, per spec.md §3
/// ("each `m_{i,j}` an unsigned byte interpreted as an Fr scalar").
pub fn byte_to_fr(byte: u8) -> Fr {
    Fr::from(byte as u64)
}

/// Converts a block index into its Fr embedding for use in the
/// hash-to-G1 surrogate `H(name, i) = (i * name) * g1`.
pub fn index_to_fr(index: u64) -> Fr {
    Fr::from_le_bytes_mod_order(&index.to_le_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{g1_generator, g2_generator};
    use ark_std::UniformRand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(crate::config::TEST_RANDOM_SEED)
    }

    #[test]
    fn fr_round_trips() {
        let mut r = rng();
        for _ in 0..16 {
            let x = Fr::rand(&mut r);
            let bytes = encode_fr(&x);
            assert_eq!(bytes.len(), FIELD_BYTES);
            let back = decode_fr(&bytes).unwrap();
            assert_eq!(x, back);
        }
    }

    #[test]
    fn g1_round_trips_including_identity() {
        let mut r = rng();
        let g1 = g1_generator();
        assert_eq!(decode_g1(&encode_g1(&g1)).unwrap(), g1);
        assert_eq!(decode_g1(&encode_g1(&crate::curve::g1_zero())).unwrap(), crate::curve::g1_zero());
        for _ in 0..8 {
            let s = Fr::rand(&mut r);
            let p = g1 * s;
            let round = decode_g1(&encode_g1(&p)).unwrap();
            assert_eq!(p, round);
        }
    }

    #[test]
    fn g2_round_trips() {
        let mut r = rng();
        let g2 = g2_generator();
        assert_eq!(decode_g2(&encode_g2(&g2)).unwrap(), g2);
        for _ in 0..8 {
            let s = Fr::rand(&mut r);
            let p = g2 * s;
            let round = decode_g2(&encode_g2(&p)).unwrap();
            assert_eq!(p, round);
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let err = decode_fr(&[0u8; 31]).unwrap_err();
        assert!(matches!(err, PorError::Decode { .. }));
        let err = decode_g1(&[0u8; G1_BYTES - 1]).unwrap_err();
        assert!(matches!(err, PorError::Decode { .. }));
    }

    #[test]
    fn tag_stride_is_o1_addressable() {
        let mut r = rng();
        let g1 = g1_generator();
        let tags: Vec<G1> = (0..5).map(|_| g1 * Fr::rand(&mut r)).collect();
        let stream = encode_g1_vec(&tags);
        assert_eq!(stream.len(), tags.len() * G1_BYTES);
        for (i, tag) in tags.iter().enumerate() {
            assert_eq!(decode_g1_at(&stream, i).unwrap(), *tag);
        }
    }

    #[test]
    fn challenge_and_mu_round_trip() {
        let pairs = vec![
            ChallengePair { index: 0, nu: 499 },
            ChallengePair { index: 7, nu: 0 },
        ];
        let encoded = encode_challenges(&pairs);
        assert_eq!(encoded.len(), pairs.len() * CHALLENGE_PAIR_BYTES);
        assert_eq!(decode_challenges(&encoded, pairs.len()).unwrap(), pairs);

        let mu = vec![0u32, 1, 255, u32::MAX];
        let encoded_mu = encode_mu(&mu);
        assert_eq!(decode_mu(&encoded_mu, mu.len()).unwrap(), mu);
    }
}
