mod args;
mod command;
mod config;
mod constant;
mod init;

use common::logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proc_args = args::parsing();

    let settings = init::get_settings(&proc_args)?;
    init::init_common_lib(&settings)?;
    logger::debug!("main - settings {:?}", settings);

    let ret = command::run(proc_args.command, &settings);
    if let Err(e) = ret.as_ref() {
        logger::error!("main - command failed");
        logger::error!("main - {}", e);
    }
    ret
}
