//! Facade: one IDE entry point hides the editor, compiler and runtime.

use crate::error::Result;
use crate::transcript::Transcript;

pub struct TextEditor;

impl TextEditor {
    pub fn create_code(&self, out: &mut Transcript) {
        out.line("Writing code");
    }

    pub fn save(&self, out: &mut Transcript) {
        out.line("Saving the code");
    }
}

pub struct Compiler;

impl Compiler {
    pub fn compile(&self, out: &mut Transcript) {
        out.line("Compiling the application");
    }
}

pub struct Clr;

impl Clr {
    pub fn execute(&self, out: &mut Transcript) {
        out.line("Running the application");
    }

    pub fn finish(&self, out: &mut Transcript) {
        out.line("Shutting down the application");
    }
}

pub struct VisualStudioFacade {
    editor: TextEditor,
    compiler: Compiler,
    clr: Clr,
}

impl Default for VisualStudioFacade {
    fn default() -> Self {
        Self::new(TextEditor, Compiler, Clr)
    }
}

impl VisualStudioFacade {
    pub fn new(editor: TextEditor, compiler: Compiler, clr: Clr) -> Self {
        Self {
            editor,
            compiler,
            clr,
        }
    }

    pub fn start(&self, out: &mut Transcript) {
        self.editor.create_code(out);
        self.editor.save(out);
        self.compiler.compile(out);
        self.clr.execute(out);
    }

    pub fn stop(&self, out: &mut Transcript) {
        self.clr.finish(out);
    }
}

pub struct Programmer;

impl Programmer {
    pub fn create_application(&self, facade: &VisualStudioFacade, out: &mut Transcript) {
        facade.start(out);
        facade.stop(out);
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let ide = VisualStudioFacade::default();
    Programmer.create_application(&ide, out);
    Ok(())
}
