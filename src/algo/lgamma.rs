//! Natural logarithm of |Γ(x)| and the sign of Γ(x).
//!
//! fdlibm `e_lgamma_r`: rational approximations on [0.9, 2] centred on the
//! three points 1, the minimum of Γ, and 2; a rational form on [2, 8) after
//! shifting down with the recurrence; Stirling's series beyond. Negative
//! arguments use the reflection formula with an exact sin(πx).

#![allow(clippy::excessive_precision)]

use core::f64::consts::PI;

use num_traits::Float;

use crate::utils::{horner, sinpi};

/// ln(Γ(n)) for n = 1, 2, ..., 100.
///
/// Positive integer arguments up to 100 are answered from this table.
#[rustfmt::skip]
const GLN_TABLE: [f64; 100] = [
    0.00000000000000000e+00,  0.00000000000000000e+00,  // Γ(1)=1, Γ(2)=1
    6.93147180559945309e-01,  1.79175946922805500e+00,  // Γ(3)=2, Γ(4)=6
    3.17805383034794562e+00,  4.78749174278204599e+00,
    6.57925121201010100e+00,  8.52516136106541430e+00,
    1.06046029027452502e+01,  1.28018274800814696e+01,
    1.51044125730755153e+01,  1.75023078458738858e+01,
    1.99872144956618861e+01,  2.25521638531234229e+01,
    2.51912211827386815e+01,  2.78992713838408916e+01,
    3.06718601060806728e+01,  3.35050734501368889e+01,
    3.63954452080330536e+01,  3.93398841871994940e+01,
    4.23356164607534850e+01,  4.53801388984769080e+01,
    4.84711813518352239e+01,  5.16066755677643736e+01,
    5.47847293981123192e+01,  5.80036052229805199e+01,
    6.12617017610020020e+01,  6.45575386270063311e+01,
    6.78897431371815350e+01,  7.12570389671680090e+01,
    7.46582363488301644e+01,  7.80922235533153106e+01,
    8.15579594561150372e+01,  8.50544670175815174e+01,
    8.85808275421976788e+01,  9.21361756036870925e+01,
    9.57196945421432025e+01,  9.93306124547874269e+01,
    1.02968198614513813e+02,  1.06631760260643459e+02,
    1.10320639714757395e+02,  1.14034211781461703e+02,
    1.17771881399745072e+02,  1.21533081515438634e+02,
    1.25317271149356895e+02,  1.29123933639127215e+02,
    1.32952575035616310e+02,  1.36802722637326368e+02,
    1.40673923648234259e+02,  1.44565743946344886e+02,
    1.48477766951773032e+02,  1.52409592584497358e+02,
    1.56360836303078785e+02,  1.60331128216630907e+02,
    1.64320112263195181e+02,  1.68327445448427652e+02,
    1.72352797139162802e+02,  1.76395848406997352e+02,
    1.80456291417543771e+02,  1.84533828861449491e+02,
    1.88628173423671591e+02,  1.92739047287844902e+02,
    1.96866181672889994e+02,  2.01009316399281527e+02,
    2.05168199482641199e+02,  2.09342586752536836e+02,
    2.13532241494563261e+02,  2.17736934113954227e+02,
    2.21956441819130334e+02,  2.26190548323727593e+02,
    2.30439043565776952e+02,  2.34701723442818268e+02,
    2.38978389561834323e+02,  2.43268849002982714e+02,
    2.47572914096186884e+02,  2.51890402209723194e+02,
    2.56221135550009525e+02,  2.60564940971863209e+02,
    2.64921649798552801e+02,  2.69291097651019823e+02,
    2.73673124285693704e+02,  2.78067573440366143e+02,
    2.82474292687630396e+02,  2.86893133295426994e+02,
    2.91323950094270308e+02,  2.95766601350760624e+02,
    3.00220948647014132e+02,  3.04686856765668715e+02,
    3.09164193580146922e+02,  3.13652829949879062e+02,
    3.18152639620209327e+02,  3.22663499126726177e+02,
    3.27185287703775217e+02,  3.31717887196928473e+02,
    3.36261181979198477e+02,  3.40815058870799018e+02,
    3.45379407062266854e+02,  3.49954118040770237e+02,
    3.54539085519440809e+02,  3.59134205369575399e+02,
];

// Around 1 and 2: lgamma(2 - y) = y*A_EVEN(y²) + A_ODD(y²)·y² - y/2
const A_EVEN: [f64; 6] = [
    7.72156649015328655494e-02,
    6.73523010531292681824e-02,
    7.38555086081402883957e-03,
    1.19270763183362067845e-03,
    2.20862790713908385557e-04,
    2.52144565451257326939e-05,
];
const A_ODD: [f64; 6] = [
    3.22467033424113591611e-01,
    2.05808084325167332806e-02,
    2.89051383673415629091e-03,
    5.10069792153511336608e-04,
    1.08011567247583939954e-04,
    4.48640949618915160150e-05,
];

/// Abscissa of the minimum of Γ on the positive axis.
const Y_MIN: f64 = 1.461632144968362245;
const TC: f64 = 1.46163214496836224576e+00;
/// lgamma(TC) split into a double and a tail.
const TF: f64 = -1.21486290535849611461e-01;
const TT: f64 = -3.63867699703950536541e-18;

// Around TC, interleaved in steps of y³
const T0: [f64; 5] = [
    4.83836122723810047042e-01,
    -3.27885410759859649565e-02,
    6.10053870246291332635e-03,
    -1.40346469989232843813e-03,
    3.15632070903625950361e-04,
];
const T1: [f64; 5] = [
    -1.47587722994593911752e-01,
    1.79706750811820387126e-02,
    -3.68452016781138256760e-03,
    8.81081882437654011382e-04,
    -3.12754168375120860518e-04,
];
const T2: [f64; 5] = [
    6.46249402391333854778e-02,
    -1.03142241298341437450e-02,
    2.25964780900612472250e-03,
    -5.38595305356740546715e-04,
    3.35529192635519073543e-04,
];

// Between the two regions above: lgamma(1 + y) = -y/2 + y·U(y)/V(y)
const U: [f64; 6] = [
    -7.72156649015328655494e-02,
    6.32827064025093366517e-01,
    1.45492250137234768737e+00,
    9.77717527963372745603e-01,
    2.28963728064692451092e-01,
    1.33810918536787660377e-02,
];
const V: [f64; 6] = [
    1.0,
    2.45597793713041134822e+00,
    2.12848976379893395361e+00,
    7.69285150456672783825e-01,
    1.04222645593369134254e-01,
    3.21709242282423911810e-03,
];

// [2, 3): lgamma(2 + y) = y/2 + y·S(y)/R(y)
const S: [f64; 7] = [
    -7.72156649015328655494e-02,
    2.14982415960608852501e-01,
    3.25778796408930981787e-01,
    1.46350472652464452805e-01,
    2.66422703033638609560e-02,
    1.84028451407337715652e-03,
    3.19475326584100867617e-05,
];
const R: [f64; 7] = [
    1.0,
    1.39200533467621045958e+00,
    7.21935547567138069525e-01,
    1.71933865632803078993e-01,
    1.86459191715652901344e-02,
    7.77942496381893596434e-04,
    7.32668430744625636189e-06,
];

// x >= 8: Stirling correction in 1/x, even powers after the first
const W: [f64; 7] = [
    4.18938533204672725052e-01,
    8.33333333333329678849e-02,
    -2.77777777728775536470e-03,
    7.93650558643019558500e-04,
    -5.95187557450339963135e-04,
    8.36339918996282139126e-04,
    -1.63092934096575273989e-03,
];

const TWO_M70: f64 = 8.47032947254300339068e-22;
const TWO_52: f64 = 4503599627370496.0;
const TWO_58: f64 = 288230376151711744.0;

/// lgamma for x in (0, 2) away from 1 and 2, which are exact zeros.
fn below_two(x: f64) -> f64 {
    // Pick the expansion point nearest x: 1 or 2 (near), Y_MIN (mid), or
    // the interval between (far).
    enum Centre {
        Near,
        Mid,
        Far,
    }
    let (lg, y, centre) = if x <= 0.9 {
        let lg = -Float::ln(x);
        if x >= Y_MIN - 1.0 + 0.27 {
            (lg, 1.0 - x, Centre::Near)
        } else if x >= Y_MIN - 1.0 - 0.27 {
            (lg, x - (TC - 1.0), Centre::Mid)
        } else {
            (lg, x, Centre::Far)
        }
    } else if x >= Y_MIN + 0.27 {
        (0.0, 2.0 - x, Centre::Near)
    } else if x >= Y_MIN - 0.27 {
        (0.0, x - TC, Centre::Mid)
    } else {
        (0.0, x - 1.0, Centre::Far)
    };

    match centre {
        Centre::Near => {
            let z = y * y;
            let p = y * horner(&A_EVEN, z) + z * horner(&A_ODD, z);
            lg + (p - 0.5 * y)
        }
        Centre::Mid => {
            let z = y * y;
            let w = z * y;
            let p = z * horner(&T0, w) - (TT - w * (horner(&T1, w) + y * horner(&T2, w)));
            lg + (TF + p)
        }
        Centre::Far => {
            let p = y * horner(&U, y) / horner(&V, y);
            lg + (-0.5 * y + p)
        }
    }
}

/// lgamma for x in [2, 8): shift onto [2, 3) and add back ln of the product.
fn below_eight(x: f64) -> f64 {
    let i = x as usize;
    let y = x - i as f64;
    let p = y * horner(&S, y);
    let q = horner(&R, y);
    let mut lg = 0.5 * y + p / q;
    if i >= 3 {
        let z = (2..i).rev().fold(1.0, |z, k| z * (y + k as f64));
        lg += Float::ln(z);
    }
    lg
}

/// lgamma for positive x >= 2^-70.
fn positive(x: f64) -> f64 {
    if x == 1.0 || x == 2.0 {
        0.0
    } else if x < 2.0 {
        below_two(x)
    } else if x < 8.0 {
        below_eight(x)
    } else if x < TWO_58 {
        let t = Float::ln(x);
        let z = 1.0 / x;
        let w = W[0] + z * horner(&W[1..], z * z);
        (x - 0.5) * (t - 1.0) + w
    } else {
        x * (Float::ln(x) - 1.0)
    }
}

/// Returns `(ln|Γ(x)|, sign of Γ(x))`.
///
/// Poles, ±0 and ±∞ give `(+∞, 1)`; NaN gives `(NaN, 1)`.
pub(crate) fn lgamma(x: f64) -> (f64, i32) {
    if x.is_nan() {
        return (x, 1);
    }
    if x.is_infinite() || x == 0.0 {
        return (f64::INFINITY, 1);
    }
    let neg = x < 0.0;
    let ax = Float::abs(x);
    if ax < TWO_M70 {
        return (-Float::ln(ax), if neg { -1 } else { 1 });
    }

    if !neg {
        if ax <= 100.0 && ax == Float::floor(ax) {
            return (GLN_TABLE[ax as usize - 1], 1);
        }
        return (positive(ax), 1);
    }

    // every float this large is an even integer
    if ax >= TWO_52 {
        return (f64::INFINITY, 1);
    }
    let t = sinpi(x);
    if t == 0.0 {
        return (f64::INFINITY, 1);
    }
    let nadj = Float::ln(PI / Float::abs(t * ax));
    let sign = if t < 0.0 { -1 } else { 1 };
    (nadj - positive(ax), sign)
}
