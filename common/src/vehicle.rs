//! # Vehicle Model
//!
//! A [`Vehicle`] is a shared record (brand, model, year, engine state) plus a
//! variant payload in [`VehicleKind`]. Behaviour that differs per variant
//! (currently only the description) is dispatched with an exhaustive match,
//! so adding a variant forces every call site to handle it.

pub mod spec;

use std::fmt;

use crate::event::Event;
use crate::id::VehicleId;

/// Two-state engine. Initial state is [`EngineState::Off`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    #[default]
    Off,
    On,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleKind {
    Car {
        doors: u32,
        /// Free-form, usually "AT" or "MT".
        transmission: String,
    },
    Motorcycle {
        body_type: String,
        has_top_box: bool,
    },
}

/// A car or motorcycle.
///
/// Identity fields are fixed at construction. The engine state can only be
/// changed through [`Vehicle::start_engine`] and [`Vehicle::stop_engine`].
/// Not `Clone`: a copy would carry the same [`VehicleId`] as the original.
#[derive(Debug)]
pub struct Vehicle {
    id: VehicleId,
    brand: String,
    model: String,
    year: i32,
    engine: EngineState,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        kind: VehicleKind,
    ) -> Self {
        Self {
            id: VehicleId::next(),
            brand: brand.into(),
            model: model.into(),
            year,
            engine: EngineState::Off,
            kind,
        }
    }

    pub fn car(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        doors: u32,
        transmission: impl Into<String>,
    ) -> Self {
        Self::new(
            brand,
            model,
            year,
            VehicleKind::Car {
                doors,
                transmission: transmission.into(),
            },
        )
    }

    pub fn motorcycle(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        body_type: impl Into<String>,
        has_top_box: bool,
    ) -> Self {
        Self::new(
            brand,
            model,
            year,
            VehicleKind::Motorcycle {
                body_type: body_type.into(),
                has_top_box,
            },
        )
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn engine(&self) -> EngineState {
        self.engine
    }

    pub fn is_engine_on(&self) -> bool {
        self.engine == EngineState::On
    }

    /// Turns the engine on. Does nothing if it is already running.
    pub fn start_engine(&mut self) {
        if self.engine == EngineState::Off {
            self.engine = EngineState::On;
            Event::EngineStarted {
                vehicle: self.id,
                label: self.describe(),
            }
            .emit();
        }
    }

    /// Turns the engine off. Does nothing if it is already off.
    pub fn stop_engine(&mut self) {
        if self.engine == EngineState::On {
            self.engine = EngineState::Off;
            Event::EngineStopped {
                vehicle: self.id,
                label: self.describe(),
            }
            .emit();
        }
    }

    /// Case-insensitive comparison of the brand against `brand`.
    pub fn has_brand(&self, brand: &str) -> bool {
        self.brand
            .chars()
            .flat_map(char::to_lowercase)
            .eq(brand.chars().flat_map(char::to_lowercase))
    }

    /// Human-readable one-line description. Pure; identical for identical state.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.brand, self.model, self.year)?;
        match &self.kind {
            VehicleKind::Car {
                doors,
                transmission,
            } => write!(f, " | Car: {doors} doors, {transmission}"),
            VehicleKind::Motorcycle {
                body_type,
                has_top_box,
            } => {
                let top_box = if *has_top_box { "yes" } else { "no" };
                write!(f, " | Moto: {body_type}, topbox: {top_box}")
            }
        }
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
