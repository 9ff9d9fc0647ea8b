//! The algebraic capability set the core consumes: Fr arithmetic, G1/G2
//! group operations, and the reduced pairing e: G1 x G2 -> GT.
//!
//! This is the one module a future curve swap touches. Everything above it
//! (codec, signer, prover, verifier) is written against these aliases, not
//! against `ark_bn254` directly, per the "polymorphism over pairing curves"
//! design note: generalize the source's curve-as-template pattern into a
//! single seam instead of threading a type parameter through every
//! function.

use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};

/// The pairing engine backing this deployment (BN-254 / alt-bn128 class).
pub type Curve = ark_bn254::Bn254;

/// Scalar field element (order r).
pub type Fr = ark_bn254::Fr;

/// G1 group element, in whatever internal coordinates the curve library
/// chooses (projective for `ark_bn254`). Only the serialized form is
/// contractually 3 Fq coordinates; arithmetic stays opaque.
pub type G1 = ark_bn254::G1Projective;

/// G1 in affine form, used only where the curve library requires it
/// (serialization, pairing inputs).
pub type G1Affine = ark_bn254::G1Affine;

/// G2 group element.
pub type G2 = ark_bn254::G2Projective;

/// G2 in affine form.
pub type G2Affine = ark_bn254::G2Affine;

/// Pairing target group element.
pub type Gt = <Curve as Pairing>::TargetField;

/// Returns the fixed G1 generator g1.
pub fn g1_generator() -> G1 {
    G1Affine::generator().into()
}

/// Returns the fixed G2 generator g2.
pub fn g2_generator() -> G2 {
    G2Affine::generator().into()
}

/// Computes the reduced pairing e(p, q).
pub fn pairing(p: G1, q: G2) -> Gt {
    Curve::pairing(p.into_affine(), q.into_affine()).0
}

/// Returns the G1 identity element (0_G1). Call sites use this explicitly
/// rather than relying on a `Default` impl, per the spec's requirement
/// that the prover/verifier accumulators be initialized to zero
/// explicitly rather than implicitly via a default-constructed point.
pub fn g1_zero() -> G1 {
    use ark_ff::Zero;
    G1::zero()
}

/// The system's hash-to-G1 surrogate, H(name, i) = (i * name) * g1.
///
/// This is a linear map in both `i` and `name`, not a random oracle, and
/// is weaker than a true hash-to-curve (see spec.md §9, Open Question 1).
/// It is kept verbatim for bit-exact compatibility with the legacy wire
/// format rather than silently hardened, which would change every tag
/// and break the pairing identity's compatibility story. Callers that
/// need a drop-in replacement should swap this single function.
pub fn hash_to_g1(name: Fr, index: u64) -> G1 {
    let i_fr = crate::codec::index_to_fr(index);
    g1_generator() * (i_fr * name)
}
