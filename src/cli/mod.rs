mod cmds;
mod output;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
