use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod show;
mod view;

#[derive(From, Subcommand)]
pub enum Applet {
    View(view::View),
    Show(show::Show),
}

impl Default for Applet {
    fn default() -> Self {
        view::View::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::View(a) => a.execute(),
            Applet::Show(a) => a.execute(),
        }
    }
}
