//! Unsigned limb-vector arithmetic. Inputs are little-endian magnitudes
//! with no leading zero limbs unless stated otherwise; outputs may carry a
//! leading zero limb, which the caller canonicalizes away.

use std::cmp::Ordering;

pub type Limb = u32;
type Wide = u64;

pub const LIMB_BITS: usize = 32;

/// Length decides first; equal lengths compare from the most significant
/// limb down.
pub fn cmp_magnitudes(a: &[Limb], b: &[Limb]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        unequal => unequal,
    }
}

pub fn add_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry: Wide = 0;
    for i in 0..long.len() {
        let t = Wide::from(long[i])
            + if i < short.len() { Wide::from(short[i]) } else { 0 }
            + carry;
        out.push(t as Limb);
        carry = t >> LIMB_BITS;
    }
    if carry != 0 {
        out.push(carry as Limb);
    }
    out
}

/// `a - b`, requiring `a >= b`.
pub fn sub_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: Limb = 0;
    for i in 0..a.len() {
        let rhs = if i < b.len() { b[i] } else { 0 };
        let (d, under1) = a[i].overflowing_sub(rhs);
        let (d, under2) = d.overflowing_sub(borrow);
        out.push(d);
        borrow = Limb::from(under1 | under2);
    }
    debug_assert_eq!(borrow, 0);
    out
}

/// Schoolbook multiply.
pub fn mul_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut out = vec![0 as Limb; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry: Wide = 0;
        for (j, &bj) in b.iter().enumerate() {
            let t = Wide::from(ai) * Wide::from(bj) + Wide::from(out[i + j]) + carry;
            out[i + j] = t as Limb;
            carry = t >> LIMB_BITS;
        }
        out[i + b.len()] = carry as Limb;
    }
    out
}

/// Short division by a single non-zero limb.
pub fn div_rem_small(dividend: &[Limb], divisor: Limb) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(divisor != 0);
    let mut quotient = vec![0 as Limb; dividend.len()];
    let mut rem: Wide = 0;
    for i in (0..dividend.len()).rev() {
        let t = (rem << LIMB_BITS) | Wide::from(dividend[i]);
        quotient[i] = (t / Wide::from(divisor)) as Limb;
        rem = t % Wide::from(divisor);
    }
    (quotient, vec![rem as Limb])
}

/// Knuth's Algorithm D. Requires a multi-limb divisor and
/// `|dividend| > |divisor|`.
pub fn div_rem_long(dividend: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let n = divisor.len();
    let m = dividend.len() - n;
    debug_assert!(n >= 2);

    // D1: normalize so the divisor's top limb has its high bit set
    let shift = divisor[n - 1].leading_zeros();
    let v = shl_bits(divisor, shift);
    let mut u = shl_bits(dividend, shift);
    u.resize(dividend.len() + 1, 0);

    let mut quotient = vec![0 as Limb; m + 1];
    for j in (0..=m).rev() {
        // D3: estimate from the top two dividend limbs
        let top = (Wide::from(u[j + n]) << LIMB_BITS) | Wide::from(u[j + n - 1]);
        let mut qhat = top / Wide::from(v[n - 1]);
        let mut rhat = top % Wide::from(v[n - 1]);
        while guess_too_big(qhat, rhat, v[n - 2], u[j + n - 2]) {
            qhat -= 1;
            rhat += Wide::from(v[n - 1]);
            if rhat > Wide::from(Limb::MAX) {
                break;
            }
        }

        // D4: multiply and subtract
        let underflowed = subtract_scaled(&mut u[j..=j + n], &v, qhat as Limb);

        // D6: the estimate was one too large
        if underflowed {
            qhat -= 1;
            add_back(&mut u[j..=j + n], &v);
        }
        quotient[j] = qhat as Limb;
    }

    // remainder = u[0..n], denormalized
    let remainder = shr_bits(&u[..n], shift);
    (quotient, remainder)
}

fn guess_too_big(qhat: Wide, rhat: Wide, v_next: Limb, u_next: Limb) -> bool {
    qhat > Wide::from(Limb::MAX)
        || qhat * Wide::from(v_next) > (rhat << LIMB_BITS) + Wide::from(u_next)
}

/// `u -= v * q` over a window one limb longer than `v`; reports whether the
/// subtraction underflowed.
fn subtract_scaled(u: &mut [Limb], v: &[Limb], q: Limb) -> bool {
    let mut borrow: Wide = 0;
    for i in 0..v.len() {
        let product = Wide::from(q) * Wide::from(v[i]) + borrow;
        let (d, under) = u[i].overflowing_sub(product as Limb);
        u[i] = d;
        borrow = (product >> LIMB_BITS) + Wide::from(under);
    }
    // the final borrow can be a full limb weight, so subtract it wide
    let top = Wide::from(u[v.len()]);
    u[v.len()] = top.wrapping_sub(borrow) as Limb;
    borrow > top
}

/// `u += v` over the same window, discarding the final carry which cancels
/// the underflow it compensates for.
fn add_back(u: &mut [Limb], v: &[Limb]) {
    let mut carry: Wide = 0;
    for i in 0..v.len() {
        let t = Wide::from(u[i]) + Wide::from(v[i]) + carry;
        u[i] = t as Limb;
        carry = t >> LIMB_BITS;
    }
    u[v.len()] = u[v.len()].wrapping_add(carry as Limb);
}

pub fn shl_magnitude(limbs: &[Limb], count: u64) -> Vec<Limb> {
    let limb_shift = (count as usize) / LIMB_BITS;
    let bit_shift = (count as usize % LIMB_BITS) as u32;
    let mut out = vec![0 as Limb; limbs.len() + limb_shift + 1];
    if bit_shift == 0 {
        out[limb_shift..limb_shift + limbs.len()].copy_from_slice(limbs);
    } else {
        for (i, &limb) in limbs.iter().enumerate() {
            out[limb_shift + i] |= limb << bit_shift;
            out[limb_shift + i + 1] = limb >> (LIMB_BITS as u32 - bit_shift);
        }
    }
    out
}

/// Requires `count` strictly less than the magnitude's bit length.
pub fn shr_magnitude(limbs: &[Limb], count: u64) -> Vec<Limb> {
    let limb_shift = (count as usize) / LIMB_BITS;
    let bit_shift = (count as usize % LIMB_BITS) as u32;
    shr_bits(&limbs[limb_shift..], bit_shift)
}

fn shl_bits(limbs: &[Limb], shift: u32) -> Vec<Limb> {
    if shift == 0 {
        return limbs.to_vec();
    }
    let mut out = vec![0 as Limb; limbs.len() + 1];
    for (i, &limb) in limbs.iter().enumerate() {
        out[i] |= limb << shift;
        out[i + 1] = limb >> (LIMB_BITS as u32 - shift);
    }
    if out.last() == Some(&0) {
        out.pop();
    }
    out
}

fn shr_bits(limbs: &[Limb], shift: u32) -> Vec<Limb> {
    if shift == 0 {
        return limbs.to_vec();
    }
    let mut out = Vec::with_capacity(limbs.len());
    for i in 0..limbs.len() {
        let high = if i + 1 < limbs.len() {
            limbs[i + 1] << (LIMB_BITS as u32 - shift)
        } else {
            0
        };
        out.push((limbs[i] >> shift) | high);
    }
    out
}
