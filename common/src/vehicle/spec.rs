//! # Vehicle Specs
//!
//! Textual vehicle descriptions accepted on the command line:
//! * `car:BRAND,MODEL,YEAR,DOORS,TRANSMISSION` (e.g. `car:Kia,Rio,2017,4,MT`)
//! * `moto:BRAND,MODEL,YEAR,BODY_TYPE,TOPBOX` (e.g. `moto:BMW,R1250RT,2020,Touring,yes`)
//!
//! A spec is plain data. [`VehicleSpec::build`] turns it into a [`Vehicle`]
//! with a fresh identity, so the same spec can produce several vehicles.

use std::str::FromStr;

use crate::error::{Result, SpecParseError};
use crate::vehicle::{Vehicle, VehicleKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSpec {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub kind: VehicleKind,
}

impl VehicleSpec {
    pub fn build(&self) -> Vehicle {
        Vehicle::new(
            self.brand.clone(),
            self.model.clone(),
            self.year,
            self.kind.clone(),
        )
    }
}

impl FromStr for VehicleSpec {
    type Err = SpecParseError;

    fn from_str(s: &str) -> Result<Self> {
        let Some((kind, fields)) = s.split_once(':') else {
            return Err(SpecParseError::MissingKind(s.to_string()));
        };

        let fields: Vec<&str> = fields.split(',').map(str::trim).collect();

        match kind.trim().to_lowercase().as_str() {
            "car" => parse_car(&fields),
            "moto" | "motorcycle" => parse_motorcycle(&fields),
            other => Err(SpecParseError::UnknownKind(other.to_string())),
        }
    }
}

fn parse_car(fields: &[&str]) -> Result<VehicleSpec> {
    let [brand, model, year, doors, transmission] = expect_fields::<5>("car", fields)?;

    Ok(VehicleSpec {
        brand: non_empty("brand", brand)?,
        model: non_empty("model", model)?,
        year: parse_number("year", year)?,
        kind: VehicleKind::Car {
            doors: parse_number("doors", doors)?,
            transmission: non_empty("transmission", transmission)?,
        },
    })
}

fn parse_motorcycle(fields: &[&str]) -> Result<VehicleSpec> {
    let [brand, model, year, body_type, top_box] = expect_fields::<5>("moto", fields)?;

    Ok(VehicleSpec {
        brand: non_empty("brand", brand)?,
        model: non_empty("model", model)?,
        year: parse_number("year", year)?,
        kind: VehicleKind::Motorcycle {
            body_type: non_empty("body type", body_type)?,
            has_top_box: parse_top_box(top_box)?,
        },
    })
}

fn expect_fields<'a, const N: usize>(
    kind: &'static str,
    fields: &[&'a str],
) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(fields).map_err(|_| SpecParseError::FieldCount {
        kind,
        expected: N,
        found: fields.len(),
    })
}

fn non_empty(field: &'static str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(SpecParseError::EmptyField(field));
    }
    Ok(value.to_string())
}

fn parse_number<T>(field: &'static str, value: &str) -> Result<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value
        .parse::<T>()
        .map_err(|source| SpecParseError::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        })
}

fn parse_top_box(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(SpecParseError::InvalidTopBox(value.to_string())),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
