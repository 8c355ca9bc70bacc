//! Reference nutrient table, per gender and age band.
//!
//! Rows hold the published recommended intakes. Protein is grams per kg of
//! body weight, Lipid and MUFA+PUFA are percentages of daily energy, energy
//! is kcal per activity level, everything else is an absolute daily amount.

use serde::Serialize;

use super::age_band::AgeBand;
use crate::profile::{ActivityLevel, Gender};

/// A reference cell: a single amount or a closed recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum NutrientValue {
    Scalar(f64),
    Range(f64, f64),
}

impl NutrientValue {
    /// Collapses the value to a single number; ranges resolve to their midpoint.
    pub fn resolve(self) -> f64 {
        match self {
            NutrientValue::Scalar(value) => value,
            NutrientValue::Range(low, high) => (low + high) / 2.0,
        }
    }
}

/// Nutrients with a gender/age-band row (energy has its own activity-indexed table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nutrient {
    Protein,
    Lipid,
    MufaPufa,
    Glucid,
    Fiber,
    Calcium,
    Iron,
    Zinc,
    VitaminA,
    VitaminC,
    Magnesium,
    Sodium,
    Potassium,
}

type Row = [NutrientValue; AgeBand::COUNT];
type EnergyRow = [f64; AgeBand::COUNT];

struct GenderRows {
    male: Row,
    female: Row,
}

struct EnergyRows {
    low: EnergyRow,
    medium: EnergyRow,
    high: EnergyRow,
}

use self::NutrientValue::{Range as R, Scalar as S};

static PROTEIN_PER_KG: GenderRows = GenderRows {
    male: [S(1.86), S(2.22), S(2.22), S(1.63), S(1.55), S(1.43), S(1.43), S(1.43), S(1.37), S(1.25), S(1.13), S(1.13), S(1.13), S(1.13)],
    female: [S(1.86), S(2.22), S(2.22), S(1.63), S(1.55), S(1.43), S(1.43), S(1.39), S(1.3), S(1.17), S(1.13), S(1.13), S(1.13), S(1.13)],
};

static LIPID_PCT: GenderRows = GenderRows {
    male: [R(24.0, 37.0), R(22.0, 29.0), R(23.0, 31.0), R(33.0, 44.0), R(36.0, 51.0), R(35.0, 52.0), R(40.0, 61.0), R(48.0, 72.0), R(56.0, 83.0), R(63.0, 94.0), R(57.0, 71.0), R(52.0, 65.0), R(52.0, 65.0), R(49.0, 61.0)],
    female: [R(22.0, 33.0), R(20.0, 27.0), R(22.0, 29.0), R(31.0, 41.0), R(34.0, 48.0), R(32.0, 49.0), R(38.0, 58.0), R(44.0, 66.0), R(51.0, 77.0), R(53.0, 79.0), R(46.0, 57.0), R(45.0, 56.0), R(44.0, 55.0), R(40.0, 51.0)],
};

static MUFA_PUFA_PCT: GenderRows = GenderRows {
    male: [S(0.0), S(10.8), S(11.7), S(16.7), S(15.9), S(19.2), S(22.2), S(26.3), S(30.6), S(34.5), S(31.4), S(28.7), S(28.54), S(26.8)],
    female: [S(0.0), S(10.0), S(10.8), S(15.34), S(15.0), S(17.8), S(21.1), S(24.2), S(28.2), S(29.1), S(25.1), S(24.6), S(24.2), S(22.2)],
};

// The published male 50-69 glucid range is written high-to-low; the midpoint is unaffected.
static GLUCID_G: GenderRows = GenderRows {
    male: [R(80.0, 90.0), R(90.0, 100.0), R(100.0, 110.0), R(140.0, 150.0), R(190.0, 200.0), R(210.0, 230.0), R(250.0, 270.0), R(290.0, 320.0), R(300.0, 340.0), R(400.0, 440.0), R(370.0, 400.0), R(330.0, 360.0), R(320.0, 250.0), R(300.0, 320.0)],
    female: [R(75.0, 80.0), R(85.0, 95.0), R(95.0, 105.0), R(135.0, 145.0), R(175.0, 190.0), R(200.0, 220.0), R(230.0, 250.0), R(230.0, 260.0), R(280.0, 300.0), R(330.0, 370.0), R(320.0, 360.0), R(290.0, 320.0), R(280.0, 310.0), R(250.0, 280.0)],
};

static FIBER_G: GenderRows = GenderRows {
    male: [S(0.0), S(0.0), S(0.0), S(19.0), R(20.0, 21.0), R(22.0, 23.0), R(24.0, 26.0), R(27.0, 28.0), R(29.0, 31.0), S(38.0), S(38.0), S(38.0), S(30.0), S(30.0)],
    female: [S(0.0), S(0.0), S(0.0), S(19.0), R(20.0, 21.0), R(22.0, 23.0), R(24.0, 25.0), S(26.0), S(26.0), S(25.0), S(25.0), S(21.0), S(21.0), S(21.0)],
};

static CALCIUM_MG: GenderRows = GenderRows {
    male: [S(300.0), S(400.0), S(400.0), S(500.0), S(600.0), S(650.0), S(700.0), S(1000.0), S(1000.0), S(1000.0), S(800.0), S(800.0), S(800.0), S(1000.0)],
    female: [S(300.0), S(400.0), S(400.0), S(500.0), S(600.0), S(650.0), S(700.0), S(1000.0), S(1000.0), S(1000.0), S(800.0), S(800.0), S(900.0), S(1000.0)],
};

static IRON_MG: GenderRows = GenderRows {
    male: [S(0.93), S(8.5), S(9.4), S(5.4), S(5.5), S(7.2), S(8.9), S(11.3), S(15.3), S(17.5), S(11.9), S(11.9), S(11.9), S(11.0)],
    female: [S(0.93), S(7.9), S(8.7), S(5.1), S(5.4), S(7.1), S(8.9), S(10.5), S(14.0), S(29.7), S(26.1), S(26.1), S(10.0), S(9.4)],
};

static ZINC_MG: GenderRows = GenderRows {
    male: [S(2.8), S(4.1), S(4.1), S(4.1), S(4.8), S(5.6), S(6.0), S(8.6), S(9.0), S(10.0), S(10.0), S(10.0), S(10.0), S(9.0)],
    female: [S(2.8), S(4.1), S(4.1), S(4.1), S(4.8), S(5.6), S(5.6), S(7.2), S(8.0), S(8.0), S(8.0), S(8.0), S(8.0), S(7.0)],
};

static VITAMIN_A_MCG: GenderRows = GenderRows {
    male: [S(0.0), S(0.0), S(400.0), S(500.0), S(450.0), S(500.0), S(600.0), S(800.0), S(900.0), S(850.0), S(850.0), S(900.0), S(850.0), S(800.0)],
    female: [S(0.0), S(0.0), S(350.0), S(400.0), S(500.0), S(450.0), S(500.0), S(600.0), S(800.0), S(900.0), S(850.0), S(900.0), S(850.0), S(800.0)],
};

static VITAMIN_C_MG: GenderRows = GenderRows {
    male: [S(0.0), S(0.0), S(0.0), S(35.0), S(40.0), S(55.0), S(60.0), S(75.0), S(95.0), S(100.0), S(100.0), S(100.0), S(100.0), S(100.0)],
    female: [S(0.0), S(0.0), S(0.0), S(35.0), S(40.0), S(55.0), S(60.0), S(75.0), S(95.0), S(100.0), S(100.0), S(100.0), S(100.0), S(100.0)],
};

static MAGNESIUM_MG: GenderRows = GenderRows {
    male: [S(40.0), S(50.0), S(60.0), S(70.0), S(100.0), S(130.0), S(170.0), S(210.0), S(290.0), S(350.0), S(340.0), S(370.0), S(350.0), S(320.0)],
    female: [S(40.0), S(50.0), S(60.0), S(70.0), S(100.0), S(130.0), S(160.0), S(210.0), S(280.0), S(300.0), S(270.0), S(290.0), S(290.0), S(260.0)],
};

static SODIUM_MG: GenderRows = GenderRows {
    male: [S(101.0), S(601.0), S(900.0), S(1100.0), S(1300.0), S(1600.0), S(1900.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0)],
    female: [S(101.0), S(601.0), S(900.0), S(1100.0), S(1300.0), S(1600.0), S(1900.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0)],
};

static POTASSIUM_MG: GenderRows = GenderRows {
    male: [S(400.0), S(700.0), S(700.0), S(900.0), S(1100.0), S(1300.0), S(1600.0), S(1900.0), S(2400.0), S(2800.0), S(2500.0), S(2500.0), S(2500.0), S(2500.0)],
    female: [S(400.0), S(700.0), S(700.0), S(900.0), S(1100.0), S(1200.0), S(1500.0), S(1800.0), S(2200.0), S(2100.0), S(2000.0), S(2000.0), S(2000.0), S(2000.0)],
};

// 0.0 marks a band/activity combination without a published reference.
static ENERGY_MALE_KCAL: EnergyRows = EnergyRows {
    low: [0.0, 0.0, 0.0, 0.0, 0.0, 1360.0, 1600.0, 1880.0, 2200.0, 2500.0, 2200.0, 2010.0, 2000.0, 1870.0],
    medium: [550.0, 650.0, 700.0, 1000.0, 1320.0, 1570.0, 1820.0, 2150.0, 2500.0, 2820.0, 2570.0, 2350.0, 2330.0, 2190.0],
    high: [0.0, 0.0, 0.0, 0.0, 0.0, 1770.0, 2050.0, 2400.0, 2790.0, 3140.0, 2940.0, 2680.0, 2660.0, 2520.0],
};

static ENERGY_FEMALE_KCAL: EnergyRows = EnergyRows {
    low: [0.0, 0.0, 0.0, 0.0, 0.0, 1270.0, 1510.0, 1740.0, 2040.0, 2110.0, 1760.0, 1730.0, 1700.0, 1500.0],
    medium: [500.0, 600.0, 650.0, 930.0, 1230.0, 1460.0, 1730.0, 1980.0, 2310.0, 2380.0, 2050.0, 2010.0, 1980.0, 1820.0],
    high: [0.0, 0.0, 0.0, 0.0, 0.0, 1650.0, 1940.0, 2220.0, 2580.0, 2650.0, 2340.0, 2300.0, 2260.0, 2090.0],
};

fn rows(nutrient: Nutrient) -> &'static GenderRows {
    match nutrient {
        Nutrient::Protein => &PROTEIN_PER_KG,
        Nutrient::Lipid => &LIPID_PCT,
        Nutrient::MufaPufa => &MUFA_PUFA_PCT,
        Nutrient::Glucid => &GLUCID_G,
        Nutrient::Fiber => &FIBER_G,
        Nutrient::Calcium => &CALCIUM_MG,
        Nutrient::Iron => &IRON_MG,
        Nutrient::Zinc => &ZINC_MG,
        Nutrient::VitaminA => &VITAMIN_A_MCG,
        Nutrient::VitaminC => &VITAMIN_C_MG,
        Nutrient::Magnesium => &MAGNESIUM_MG,
        Nutrient::Sodium => &SODIUM_MG,
        Nutrient::Potassium => &POTASSIUM_MG,
    }
}

/// Raw reference value for a nutrient; ranges are returned unresolved.
pub fn lookup(nutrient: Nutrient, gender: Gender, band: AgeBand) -> NutrientValue {
    let rows = rows(nutrient);
    let row = match gender {
        Gender::Male => &rows.male,
        Gender::Female => &rows.female,
    };
    row[band.index()]
}

/// Raw energy reference in kcal/day. Returns 0.0 where no reference is published.
pub fn energy_lookup(gender: Gender, activity: ActivityLevel, band: AgeBand) -> f64 {
    let rows = match gender {
        Gender::Male => &ENERGY_MALE_KCAL,
        Gender::Female => &ENERGY_FEMALE_KCAL,
    };
    let row = match activity {
        ActivityLevel::Low => &rows.low,
        ActivityLevel::Medium => &rows.medium,
        ActivityLevel::High => &rows.high,
    };
    row[band.index()]
}
