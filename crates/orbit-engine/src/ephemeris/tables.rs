// ephemeris/tables.rs
//
// Constant data for the Simon et al. (1994) truncated planetary theory.
// Rows are Mercury, Venus, EMB, Mars, Jupiter, Saturn, Uranus, Neptune.
//
// Mean elements are quadratics in t (Julian millennia from J2000.0).
// Angles: constant term in degrees, t and t^2 terms in arcseconds.

/// Gaussian gravitational constant.
pub const GK: f64 = 0.017_202_098_95;

/// Sine and cosine of the J2000.0 mean obliquity (IAU 1976).
pub const SINEPS: f64 = 0.397_777_155_931_913_7;
pub const COSEPS: f64 = 0.917_482_062_069_181_8;

/// Fundamental frequency of the periodic terms, radians per millennium.
pub const DMU_RATE: f64 = 0.359_536_2;

/// Planetary inverse masses.
pub const AMAS: [f64; 8] = [
    6_023_600.0, 408_523.5, 328_900.5, 3_098_710.0, 1047.355, 3498.5, 22869.0, 19314.0,
];

/// Semi-major axis (au).
pub const A: [[f64; 3]; 8] = [
    [0.387_098_309_8, 0.0, 0.0],
    [0.723_329_82, 0.0, 0.0],
    [1.000_001_017_8, 0.0, 0.0],
    [1.523_679_341_9, 3e-10, 0.0],
    [5.202_603_209_2, 19132e-10, -39e-10],
    [9.554_909_191_5, -0.000_021_389_6, 444e-10],
    [19.218_446_061_8, -3716e-10, 979e-10],
    [30.110_386_869_4, -16635e-10, 686e-10],
];

/// Mean longitude.
pub const DLM: [[f64; 3]; 8] = [
    [252.250_905_52, 5_381_016_286.889_82, -1.927_89],
    [181.979_800_85, 2_106_641_364.335_48, 0.593_81],
    [100.466_456_83, 1_295_977_422.834_29, -2.044_11],
    [355.432_999_58, 689_050_774.939_88, 0.942_64],
    [34.351_518_74, 109_256_603.779_91, -30.603_78],
    [50.077_444_30, 43_996_098.557_32, 75.616_14],
    [314.055_005_11, 15_424_811.939_33, -1.750_83],
    [304.348_665_48, 7_865_503.207_44, 0.211_03],
];

/// Eccentricity.
pub const E: [[f64; 3]; 8] = [
    [0.205_631_752_6, 0.000_204_065_3, -28349e-10],
    [0.006_771_916_4, -0.000_477_652_1, 98127e-10],
    [0.016_708_634_2, -0.000_420_365_4, -0.000_012_673_4],
    [0.093_400_647_7, 0.000_904_843_8, -80641e-10],
    [0.048_497_925_5, 0.001_632_254_2, -0.000_047_136_6],
    [0.055_548_142_6, -0.003_466_406_2, -0.000_064_363_9],
    [0.046_381_222_1, -0.000_272_929_3, 0.000_007_891_3],
    [0.009_455_747_0, 0.000_060_326_3, 0.0],
];

/// Longitude of perihelion.
pub const PI: [[f64; 3]; 8] = [
    [77.456_119_04, 5719.1159, -4.830_16],
    [131.563_703_00, 175.4864, -498.481_84],
    [102.937_348_08, 11612.3529, 53.275_77],
    [336.060_233_95, 15980.459_08, -62.328_00],
    [14.331_206_87, 7758.751_63, 259.959_38],
    [93.057_237_48, 20395.494_39, 190.259_52],
    [173.005_291_06, 3215.562_38, -34.092_88],
    [48.120_275_54, 1050.719_12, 27.397_17],
];

/// Inclination.
pub const DINC: [[f64; 3]; 8] = [
    [7.004_986_25, -214.256_29, 0.289_77],
    [3.394_661_89, -30.844_37, -11.678_36],
    [0.0, 469.972_89, -3.350_53],
    [1.849_726_48, -293.317_22, -8.118_30],
    [1.303_266_98, -71.558_90, 11.952_97],
    [2.488_878_78, 91.851_95, -17.662_25],
    [0.773_196_89, -60.727_23, 1.257_59],
    [1.769_952_59, 8.123_33, 0.081_35],
];

/// Longitude of the ascending node.
pub const OMEGA: [[f64; 3]; 8] = [
    [48.330_893_04, -4515.217_27, -31.798_92],
    [76.679_920_19, -10008.481_54, -51.326_14],
    [174.873_175_77, -8679.270_34, 15.341_91],
    [49.558_093_21, -10620.900_88, -230.574_16],
    [100.464_407_02, 6362.035_61, 326.521_78],
    [113.665_502_52, -9240.199_42, -66.237_43],
    [74.005_957_01, 2669.150_33, 145.939_64],
    [131.784_057_02, -221.943_22, -0.787_28],
];

// Periodic terms added to the semi-major axis. The 9th term carries an extra
// factor of t.

pub const KP: [[f64; 9]; 8] = [
    [69613.0, 75645.0, 88306.0, 59899.0, 15746.0, 71087.0, 142173.0, 3086.0, 0.0],
    [21863.0, 32794.0, 26934.0, 10931.0, 26250.0, 43725.0, 53867.0, 28939.0, 0.0],
    [16002.0, 21863.0, 32004.0, 10931.0, 14529.0, 16368.0, 15318.0, 32794.0, 0.0],
    [6345.0, 7818.0, 15636.0, 7077.0, 8184.0, 14163.0, 1107.0, 4872.0, 0.0],
    [1760.0, 1454.0, 1167.0, 880.0, 287.0, 2640.0, 19.0, 2047.0, 1454.0],
    [574.0, 0.0, 880.0, 287.0, 19.0, 1760.0, 1167.0, 306.0, 574.0],
    [204.0, 0.0, 177.0, 1265.0, 4.0, 385.0, 200.0, 208.0, 204.0],
    [0.0, 102.0, 106.0, 4.0, 98.0, 1367.0, 487.0, 204.0, 0.0],
];

pub const CA: [[f64; 9]; 8] = [
    [4.0, -13.0, 11.0, -9.0, -9.0, -3.0, -1.0, 4.0, 0.0],
    [-156.0, 59.0, -42.0, 6.0, 19.0, -20.0, -10.0, -12.0, 0.0],
    [64.0, -152.0, 62.0, -8.0, 32.0, -41.0, 19.0, -11.0, 0.0],
    [124.0, 621.0, -145.0, 208.0, 54.0, -57.0, 30.0, 15.0, 0.0],
    [-23437.0, -2634.0, 6601.0, 6259.0, -1507.0, -1821.0, 2620.0, -2115.0, -1489.0],
    [62911.0, -119919.0, 79336.0, 17814.0, -24241.0, 12068.0, 8306.0, -4893.0, 8902.0],
    [389061.0, -262125.0, -44088.0, 8387.0, -22976.0, -2093.0, -615.0, -9720.0, 6633.0],
    [-412235.0, -157046.0, -31430.0, 37817.0, -9740.0, -13.0, -7449.0, 9644.0, 0.0],
];

pub const SA: [[f64; 9]; 8] = [
    [-29.0, -1.0, 9.0, 6.0, -6.0, 5.0, 4.0, 0.0, 0.0],
    [-48.0, -125.0, -26.0, -37.0, 18.0, -13.0, -20.0, -2.0, 0.0],
    [-150.0, -46.0, 68.0, 54.0, 14.0, 24.0, -28.0, 22.0, 0.0],
    [-621.0, 532.0, -694.0, -20.0, 192.0, -94.0, 71.0, -73.0, 0.0],
    [-14614.0, -19828.0, -5869.0, 1881.0, -4372.0, -2255.0, 782.0, 930.0, 913.0],
    [139737.0, 0.0, 24667.0, 51123.0, -5102.0, 7429.0, -4095.0, -1976.0, -9566.0],
    [-138081.0, 0.0, 37205.0, -49039.0, -41901.0, -33872.0, -27037.0, -12474.0, 18797.0],
    [0.0, 28492.0, 133236.0, 69654.0, 52322.0, -49577.0, -26430.0, -3593.0, 0.0],
];

// Periodic terms added to the mean longitude. The 9th and 10th terms carry an
// extra factor of t.

pub const KQ: [[f64; 10]; 8] = [
    [3086.0, 15746.0, 69613.0, 59899.0, 75645.0, 88306.0, 12661.0, 2658.0, 0.0, 0.0],
    [21863.0, 32794.0, 10931.0, 73.0, 4387.0, 26934.0, 1473.0, 2157.0, 0.0, 0.0],
    [10.0, 16002.0, 21863.0, 10931.0, 1473.0, 32004.0, 4387.0, 73.0, 0.0, 0.0],
    [10.0, 6345.0, 7818.0, 1107.0, 15636.0, 7077.0, 8184.0, 532.0, 10.0, 0.0],
    [19.0, 1760.0, 1454.0, 287.0, 1167.0, 880.0, 574.0, 2640.0, 19.0, 1454.0],
    [19.0, 574.0, 287.0, 306.0, 1760.0, 12.0, 31.0, 38.0, 19.0, 574.0],
    [4.0, 204.0, 177.0, 8.0, 31.0, 200.0, 1265.0, 102.0, 4.0, 204.0],
    [4.0, 102.0, 106.0, 8.0, 98.0, 1367.0, 487.0, 204.0, 4.0, 102.0],
];

pub const CL: [[f64; 10]; 8] = [
    [21.0, -95.0, -157.0, 41.0, -5.0, 42.0, 23.0, 30.0, 0.0, 0.0],
    [-160.0, -313.0, -235.0, 60.0, -74.0, -76.0, -27.0, 34.0, 0.0, 0.0],
    [-325.0, -322.0, -79.0, 232.0, -52.0, 97.0, 55.0, -41.0, 0.0, 0.0],
    [2268.0, -979.0, 802.0, 602.0, -668.0, -33.0, 345.0, 201.0, -55.0, 0.0],
    [7610.0, -4997.0, -7689.0, -5841.0, -2617.0, 1115.0, -748.0, -607.0, 6074.0, 354.0],
    [-18549.0, 30125.0, 20012.0, -730.0, 824.0, 23.0, 1289.0, -352.0, -14767.0, -2062.0],
    [-135245.0, -14594.0, 4197.0, -4030.0, -5630.0, -2898.0, 2540.0, -306.0, 2939.0, 1986.0],
    [89948.0, 2103.0, 8963.0, 2695.0, 3682.0, 1648.0, 866.0, -154.0, -1963.0, -283.0],
];

pub const SL: [[f64; 10]; 8] = [
    [-342.0, 136.0, -23.0, 62.0, 66.0, -52.0, -33.0, 17.0, 0.0, 0.0],
    [524.0, -149.0, -35.0, 117.0, 151.0, 122.0, -71.0, -62.0, 0.0, 0.0],
    [-105.0, -137.0, 258.0, 35.0, -116.0, -88.0, -112.0, -80.0, 0.0, 0.0],
    [854.0, -205.0, -936.0, -240.0, 140.0, -341.0, -97.0, -232.0, 536.0, 0.0],
    [-56980.0, 8016.0, 1012.0, 1448.0, -3024.0, -3710.0, 318.0, 503.0, 3767.0, 577.0],
    [138606.0, -13478.0, -4964.0, 1441.0, -1319.0, -1482.0, 427.0, 1236.0, -9167.0, -1918.0],
    [71234.0, -41116.0, 5334.0, -4935.0, -1848.0, 66.0, 434.0, -1748.0, 3780.0, -701.0],
    [-47645.0, 11647.0, 2166.0, 3194.0, 679.0, 0.0, -244.0, -419.0, -2531.0, 48.0],
];
