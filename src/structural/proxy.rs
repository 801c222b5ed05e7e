//! Proxy: stand-ins for an archive. The access proxy checks credentials,
//! the virtual proxy postpones loading until the first read.

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(String),
    Denied,
    NotFound,
}

pub trait Archive {
    fn read(&mut self, page: usize, out: &mut Transcript) -> Access;
}

/// The expensive real subject.
pub struct RealArchive {
    pages: Vec<String>,
}

impl RealArchive {
    pub fn open(out: &mut Transcript) -> Self {
        out.line("Loading the archive from storage");
        Self {
            pages: vec![
                "Chapter 1: The beginning".to_string(),
                "Chapter 2: The middle".to_string(),
                "Chapter 3: The end".to_string(),
            ],
        }
    }
}

impl Archive for RealArchive {
    fn read(&mut self, page: usize, _out: &mut Transcript) -> Access {
        match self.pages.get(page) {
            Some(text) => Access::Granted(text.clone()),
            None => Access::NotFound,
        }
    }
}

pub struct AccessProxy {
    real: RealArchive,
    passphrase: String,
    authorized: bool,
}

impl AccessProxy {
    pub fn new(real: RealArchive, passphrase: impl Into<String>) -> Self {
        Self {
            real,
            passphrase: passphrase.into(),
            authorized: false,
        }
    }

    pub fn authorize(&mut self, attempt: &str, out: &mut Transcript) -> bool {
        self.authorized = attempt == self.passphrase;
        if self.authorized {
            out.line("Access granted");
        } else {
            out.line("Wrong passphrase");
        }
        self.authorized
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }
}

impl Archive for AccessProxy {
    fn read(&mut self, page: usize, out: &mut Transcript) -> Access {
        if !self.authorized {
            return Access::Denied;
        }
        self.real.read(page, out)
    }
}

#[derive(Default)]
pub struct LazyArchive {
    real: Option<RealArchive>,
}

impl LazyArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }
}

impl Archive for LazyArchive {
    fn read(&mut self, page: usize, out: &mut Transcript) -> Access {
        let real = self.real.get_or_insert_with(|| RealArchive::open(out));
        real.read(page, out)
    }
}

fn report(access: Access, out: &mut Transcript) {
    match access {
        Access::Granted(text) => out.line(format!("Read: {text}")),
        Access::Denied => out.line("Read denied"),
        Access::NotFound => out.line("No such page"),
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let mut guarded = AccessProxy::new(RealArchive::open(out), "open sesame");
    report(guarded.read(0, out), out);
    guarded.authorize("let me in", out);
    report(guarded.read(0, out), out);
    guarded.authorize("open sesame", out);
    report(guarded.read(0, out), out);

    let mut lazy = LazyArchive::new();
    out.line(format!("Archive loaded: {}", lazy.is_loaded()));
    report(lazy.read(1, out), out);
    report(lazy.read(7, out), out);
    out.line(format!("Archive loaded: {}", lazy.is_loaded()));
    Ok(())
}
