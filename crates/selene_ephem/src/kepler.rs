//! Keplerian mean-element propagation for the planets.
//!
//! Elements and centennial rates are JPL's published approximate mean
//! orbital elements referred to the mean ecliptic of J2000, valid for
//! 1800 AD – 2050 AD (E.M. Standish, "Approximate Positions of the
//! Planets"). Public domain data.
//!
//! Propagation: linear elements, Kepler's equation by Newton iteration,
//! rotation from the orbital plane to heliocentric ecliptic coordinates.

/// Mean orbital elements at J2000 plus rates per Julian century.
///
/// Angles in degrees, semi-major axis in au.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MeanElements {
    pub a: f64,
    pub e: f64,
    pub incl: f64,
    /// Mean longitude L.
    pub mean_lon: f64,
    /// Longitude of perihelion (ϖ = Ω + ω).
    pub peri_lon: f64,
    /// Longitude of the ascending node Ω.
    pub node: f64,
    pub a_dot: f64,
    pub e_dot: f64,
    pub incl_dot: f64,
    pub mean_lon_dot: f64,
    pub peri_lon_dot: f64,
    pub node_dot: f64,
}

/// Index order of [`ELEMENTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orbit {
    Mercury = 0,
    Venus = 1,
    /// Earth-Moon barycenter; stands in for the Earth observer.
    EarthMoonBary = 2,
    Mars = 3,
    Jupiter = 4,
    Saturn = 5,
    Uranus = 6,
    Neptune = 7,
    Pluto = 8,
}

pub(crate) const ELEMENTS: [MeanElements; 9] = [
    // Mercury
    MeanElements {
        a: 0.387_099_27,
        e: 0.205_635_93,
        incl: 7.004_979_02,
        mean_lon: 252.250_323_50,
        peri_lon: 77.457_796_28,
        node: 48.330_765_93,
        a_dot: 0.000_000_37,
        e_dot: 0.000_019_06,
        incl_dot: -0.005_947_49,
        mean_lon_dot: 149_472.674_111_75,
        peri_lon_dot: 0.160_476_89,
        node_dot: -0.125_340_81,
    },
    // Venus
    MeanElements {
        a: 0.723_335_66,
        e: 0.006_776_72,
        incl: 3.394_676_05,
        mean_lon: 181.979_099_50,
        peri_lon: 131.602_467_18,
        node: 76.679_842_55,
        a_dot: 0.000_003_90,
        e_dot: -0.000_041_07,
        incl_dot: -0.000_788_90,
        mean_lon_dot: 58_517.815_387_29,
        peri_lon_dot: 0.002_683_29,
        node_dot: -0.277_694_18,
    },
    // Earth-Moon barycenter
    MeanElements {
        a: 1.000_002_61,
        e: 0.016_711_23,
        incl: -0.000_015_31,
        mean_lon: 100.464_571_66,
        peri_lon: 102.937_681_93,
        node: 0.0,
        a_dot: 0.000_005_62,
        e_dot: -0.000_043_92,
        incl_dot: -0.012_946_68,
        mean_lon_dot: 35_999.372_449_81,
        peri_lon_dot: 0.323_273_64,
        node_dot: 0.0,
    },
    // Mars
    MeanElements {
        a: 1.523_710_34,
        e: 0.093_394_10,
        incl: 1.849_691_42,
        mean_lon: -4.553_432_05,
        peri_lon: -23.943_629_59,
        node: 49.559_538_91,
        a_dot: 0.000_018_47,
        e_dot: 0.000_078_82,
        incl_dot: -0.008_131_31,
        mean_lon_dot: 19_140.302_684_99,
        peri_lon_dot: 0.444_410_88,
        node_dot: -0.292_573_43,
    },
    // Jupiter
    MeanElements {
        a: 5.202_887_00,
        e: 0.048_386_24,
        incl: 1.304_396_95,
        mean_lon: 34.396_440_51,
        peri_lon: 14.728_479_83,
        node: 100.473_909_09,
        a_dot: -0.000_116_07,
        e_dot: -0.000_132_53,
        incl_dot: -0.001_837_14,
        mean_lon_dot: 3_034.746_127_75,
        peri_lon_dot: 0.212_526_68,
        node_dot: 0.204_691_06,
    },
    // Saturn
    MeanElements {
        a: 9.536_675_94,
        e: 0.053_861_79,
        incl: 2.485_991_87,
        mean_lon: 49.954_244_23,
        peri_lon: 92.598_878_31,
        node: 113.662_424_48,
        a_dot: -0.001_250_60,
        e_dot: -0.000_509_91,
        incl_dot: 0.001_936_09,
        mean_lon_dot: 1_222.493_622_01,
        peri_lon_dot: -0.418_972_16,
        node_dot: -0.288_677_94,
    },
    // Uranus
    MeanElements {
        a: 19.189_164_64,
        e: 0.047_257_44,
        incl: 0.772_637_83,
        mean_lon: 313.238_104_51,
        peri_lon: 170.954_276_30,
        node: 74.016_925_03,
        a_dot: -0.001_961_76,
        e_dot: -0.000_043_97,
        incl_dot: -0.002_429_39,
        mean_lon_dot: 428.482_027_85,
        peri_lon_dot: 0.408_052_81,
        node_dot: 0.042_405_89,
    },
    // Neptune
    MeanElements {
        a: 30.069_922_76,
        e: 0.008_590_48,
        incl: 1.770_043_47,
        mean_lon: -55.120_029_69,
        peri_lon: 44.964_762_27,
        node: 131.784_225_74,
        a_dot: 0.000_262_91,
        e_dot: 0.000_051_05,
        incl_dot: 0.000_353_72,
        mean_lon_dot: 218.459_453_25,
        peri_lon_dot: -0.322_414_64,
        node_dot: -0.005_086_64,
    },
    // Pluto
    MeanElements {
        a: 39.482_116_75,
        e: 0.248_827_30,
        incl: 17.140_012_06,
        mean_lon: 238.929_038_33,
        peri_lon: 224.068_916_29,
        node: 110.303_936_84,
        a_dot: -0.000_315_96,
        e_dot: 0.000_051_70,
        incl_dot: 0.000_048_18,
        mean_lon_dot: 145.207_805_15,
        peri_lon_dot: -0.040_629_42,
        node_dot: -0.011_834_82,
    },
];

/// Solve Kepler's equation M = E − e·sin(E) for the eccentric anomaly.
///
/// `m_deg` is the mean anomaly in degrees; returns E in radians.
fn solve_kepler(m_deg: f64, e: f64) -> f64 {
    let m = m_deg.to_radians().rem_euclid(std::f64::consts::TAU);
    let mut ecc_anom = m + e * m.sin();
    // Newton iteration; converges in a handful of steps for e < 0.25.
    for _ in 0..12 {
        let delta_m = m - (ecc_anom - e * ecc_anom.sin());
        let delta_e = delta_m / (1.0 - e * ecc_anom.cos());
        ecc_anom += delta_e;
        if delta_e.abs() < 1e-12 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric ecliptic position of an orbit at `t` Julian centuries
/// from J2000. Returns `[x, y, z]` in au, mean ecliptic of J2000.
pub(crate) fn heliocentric_position(orbit: Orbit, t: f64) -> [f64; 3] {
    let el = &ELEMENTS[orbit as usize];

    let a = el.a + el.a_dot * t;
    let e = el.e + el.e_dot * t;
    let incl = (el.incl + el.incl_dot * t).to_radians();
    let mean_lon = el.mean_lon + el.mean_lon_dot * t;
    let peri_lon = el.peri_lon + el.peri_lon_dot * t;
    let node = (el.node + el.node_dot * t).to_radians();

    let arg_peri = peri_lon.to_radians() - node;
    let mean_anom = mean_lon - peri_lon;

    let ecc_anom = solve_kepler(mean_anom, e);

    // Position in the orbital plane, x toward perihelion.
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (sin_w, cos_w) = arg_peri.sin_cos();
    let (sin_o, cos_o) = node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    [
        (cos_w * cos_o - sin_w * sin_o * cos_i) * xp
            + (-sin_w * cos_o - cos_w * sin_o * cos_i) * yp,
        (cos_w * sin_o + sin_w * cos_o * cos_i) * xp
            + (-sin_w * sin_o + cos_w * cos_o * cos_i) * yp,
        (sin_w * sin_i) * xp + (cos_w * sin_i) * yp,
    ]
}
