#[macro_use(err_obj)]
#[macro_use(err)]
extern crate dprint_cli_core;
#[macro_use]
pub mod environment;


pub mod arg_parser;
pub mod configuration;
mod run;
pub mod translations;

pub use run::run;
