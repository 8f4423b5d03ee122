#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    mpr_viewer::logging::init();

    let result = if std::env::args_os().count() <= 1 {
        mpr_viewer::run_viewer()
    } else {
        mpr_viewer::run_cli()
    };

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
