use std::{
    fs::File,
    io::{BufWriter, Result, Write},
};
use excitable_membrane::neuron::{
    count_action_potentials, run_injection_protocol,
    MembraneParameters, MembraneState, StepProtocol,
};


// Runs the two-pulse injection protocol on a Hodgkin-Huxley membrane,
// writes the sampled trajectory to a .csv file at the working directory,
// and prints the number of action potentials per stimulus window
fn main() -> Result<()> {
    let trajectory = run_injection_protocol(
        MembraneParameters::default(),
        StepProtocol::default(),
        MembraneState::new(-65., 0.05, 0.6, 0.32),
        0.,
        450.,
        0.01,
    ).expect("Could not integrate membrane equations");

    let file = File::create("hodgkin_huxley.csv")?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "t,v,m,h,n")?;
    for i in 0..trajectory.times.len() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            trajectory.times[i],
            trajectory.voltages[i],
            trajectory.m[i],
            trajectory.h[i],
            trajectory.n[i],
        )?;
    }

    let windows = [(0., 100.), (100., 200.), (200., 300.), (300., 400.), (400., 450.)];
    for (start, end) in windows {
        let spikes = count_action_potentials(
            &trajectory.voltages_in_window(start, end),
            -50.,
            20.,
        );

        println!("{} ms to {} ms: {} action potentials", start, end, spikes);
    }

    Ok(())
}
