//! Factory Method: a closed selector decides which product is built.

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Drivable {
    fn drive(&self, out: &mut Transcript);
}

pub struct Car;

impl Drivable for Car {
    fn drive(&self, out: &mut Transcript) {
        out.line("Drive car!");
    }
}

pub struct Truck;

impl Drivable for Truck {
    fn drive(&self, out: &mut Transcript) {
        out.line("Drive truck!");
    }
}

pub struct Bus;

impl Drivable for Bus {
    fn drive(&self, out: &mut Transcript) {
        out.line("Drive bus!");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vehicle {
    BmwX5,
    Kamaz,
    MercedesTourismo,
}

impl Vehicle {
    pub const ALL: [Vehicle; 3] = [Vehicle::BmwX5, Vehicle::Kamaz, Vehicle::MercedesTourismo];
}

pub struct VehicleFactory;

impl VehicleFactory {
    pub fn create(vehicle: Vehicle) -> Box<dyn Drivable> {
        match vehicle {
            Vehicle::BmwX5 => Box::new(Car),
            Vehicle::Kamaz => Box::new(Truck),
            Vehicle::MercedesTourismo => Box::new(Bus),
        }
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    for vehicle in Vehicle::ALL {
        VehicleFactory::create(vehicle).drive(out);
    }
    Ok(())
}
