//! Times the phases of a simulated request and reports them as log events and JSON.

use std::thread;
use std::time::Duration;

use named_timers::Timers;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let timers = Timers::new();
    let request = timers.start_timer("request");

    {
        let query = timers.start_timer("db-query");
        thread::sleep(Duration::from_millis(30));
        query.stop();
    }

    let render = timers.start_timer("render");
    for chunk in 0..3 {
        thread::sleep(Duration::from_millis(5));
        println!("rendered chunk {chunk} after {:?}", render.elapsed());
    }
    render.stop();

    request.stop();

    timers.log_report();
    print!("{timers}");

    match timers.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("could not encode timers: {e}"),
    }
}
