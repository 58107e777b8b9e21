use stdlib_tour::launcher;

/// Launch the workers, then wait for them before the process exits unless
/// `detach` is set. `launch` itself never blocks; the exit policy lives here.
pub fn run(count: usize, message: &str, detach: bool) -> anyhow::Result<u8> {
    let handles = launcher::launch_printing(count, message)?;

    if detach {
        // Workers still running when main returns are torn down.
        return Ok(0);
    }

    let panicked = launcher::join_all(handles);
    if panicked > 0 {
        anyhow::bail!("{} of {} workers panicked", panicked, count);
    }
    Ok(0)
}
