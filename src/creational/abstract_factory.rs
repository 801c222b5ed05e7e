//! Abstract Factory: one factory per brand, every product it makes belongs
//! to that brand.

use std::fmt;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Bmw,
    Mercedes,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Bmw => f.write_str("BMW"),
            Brand::Mercedes => f.write_str("Mercedes"),
        }
    }
}

pub trait VehicleDrivable {
    fn brand(&self) -> Brand;
    fn drive(&self, out: &mut Transcript);
}

pub trait SpareParts {
    fn brand(&self) -> Brand;
    fn catalog(&self) -> &'static [&'static str];
}

pub struct BmwCar;

impl VehicleDrivable for BmwCar {
    fn brand(&self) -> Brand {
        Brand::Bmw
    }

    fn drive(&self, out: &mut Transcript) {
        out.line("BMW driving");
    }
}

pub struct MercedesCar;

impl VehicleDrivable for MercedesCar {
    fn brand(&self) -> Brand {
        Brand::Mercedes
    }

    fn drive(&self, out: &mut Transcript) {
        out.line("Mercedes driving");
    }
}

pub struct BmwParts;

impl SpareParts for BmwParts {
    fn brand(&self) -> Brand {
        Brand::Bmw
    }

    fn catalog(&self) -> &'static [&'static str] {
        &["BMW brake pads", "BMW oil filter"]
    }
}

pub struct MercedesParts;

impl SpareParts for MercedesParts {
    fn brand(&self) -> Brand {
        Brand::Mercedes
    }

    fn catalog(&self) -> &'static [&'static str] {
        &["Mercedes brake pads", "Mercedes oil filter"]
    }
}

/// Everything one factory call hands out.
pub struct CarFamily {
    pub car: Box<dyn VehicleDrivable>,
    pub parts: Box<dyn SpareParts>,
}

impl CarFamily {
    pub fn brand(&self) -> Brand {
        self.car.brand()
    }

    pub fn is_consistent(&self) -> bool {
        self.car.brand() == self.parts.brand()
    }
}

pub trait CarAbstractFactory {
    fn create_car(&self) -> Box<dyn VehicleDrivable>;
    fn create_parts(&self) -> Box<dyn SpareParts>;

    fn create_family(&self) -> CarFamily {
        CarFamily {
            car: self.create_car(),
            parts: self.create_parts(),
        }
    }
}

pub struct BmwFactory;

impl CarAbstractFactory for BmwFactory {
    fn create_car(&self) -> Box<dyn VehicleDrivable> {
        Box::new(BmwCar)
    }

    fn create_parts(&self) -> Box<dyn SpareParts> {
        Box::new(BmwParts)
    }
}

pub struct MercedesFactory;

impl CarAbstractFactory for MercedesFactory {
    fn create_car(&self) -> Box<dyn VehicleDrivable> {
        Box::new(MercedesCar)
    }

    fn create_parts(&self) -> Box<dyn SpareParts> {
        Box::new(MercedesParts)
    }
}

/// Selector that doubles as a factory by delegating to the brand factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarsFactoryType {
    Bmw,
    Mercedes,
}

impl CarsFactoryType {
    fn factory(self) -> &'static dyn CarAbstractFactory {
        match self {
            CarsFactoryType::Bmw => &BmwFactory,
            CarsFactoryType::Mercedes => &MercedesFactory,
        }
    }
}

impl CarAbstractFactory for CarsFactoryType {
    fn create_car(&self) -> Box<dyn VehicleDrivable> {
        self.factory().create_car()
    }

    fn create_parts(&self) -> Box<dyn SpareParts> {
        self.factory().create_parts()
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    for factory in [CarsFactoryType::Bmw, CarsFactoryType::Mercedes] {
        let family = factory.create_family();
        family.car.drive(out);
        out.line(format!(
            "{} parts: {}",
            family.brand(),
            family.parts.catalog().join(", ")
        ));
    }
    Ok(())
}
