//! Adapter: a camel gets a `Driveable` face so a traveller can ride it like
//! a car.

use crate::error::Result;
use crate::transcript::Transcript;

// Target interface the client expects
pub trait Driveable {
    fn drive(&self, out: &mut Transcript);
}

pub trait Traveller {
    fn travel(&self, transport: &dyn Driveable, out: &mut Transcript);
}

pub struct Man;

impl Traveller for Man {
    fn travel(&self, transport: &dyn Driveable, out: &mut Transcript) {
        transport.drive(out);
    }
}

pub struct Auto;

impl Driveable for Auto {
    fn drive(&self, out: &mut Transcript) {
        out.line("Car is driving on the road");
    }
}

// Existing interface with a different shape
pub trait Moveable {
    fn move_on(&self, out: &mut Transcript);
}

pub struct Camel;

impl Moveable for Camel {
    fn move_on(&self, out: &mut Transcript) {
        out.line("Camel is moving on sand");
    }
}

pub struct CamelToTransportAdapter<M: Moveable = Camel> {
    camel: M,
}

impl<M: Moveable> CamelToTransportAdapter<M> {
    pub fn new(camel: M) -> Self {
        Self { camel }
    }
}

impl<M: Moveable> Driveable for CamelToTransportAdapter<M> {
    fn drive(&self, out: &mut Transcript) {
        self.camel.move_on(out);
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let man = Man;
    man.travel(&Auto, out);

    let camel_adapter = CamelToTransportAdapter::new(Camel);
    man.travel(&camel_adapter, out);
    Ok(())
}
