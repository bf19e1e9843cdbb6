use calc_compute::numerical::{ctxt::Ctxt, trig_mode::TrigMode};

/// Command line options.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// The context every expression is evaluated with.
    pub ctxt: Ctxt,

    /// A file to read expressions from, one per line.
    pub file: Option<String>,
}

/// Parses the command line arguments, excluding the program name.
///
/// The flags are applied in order, so `--legacy --radians` and `--radians --legacy` both evaluate
/// in radians.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();

    for arg in args {
        match arg.as_str() {
            "--strict" => {
                parsed.ctxt = Ctxt {
                    trig_mode: parsed.ctxt.trig_mode,
                    ..Ctxt::strict()
                };
            },
            "--legacy" => {
                parsed.ctxt = Ctxt {
                    trig_mode: parsed.ctxt.trig_mode,
                    ..Ctxt::legacy()
                };
            },
            "--radians" => parsed.ctxt.trig_mode = TrigMode::Radians,
            "--degrees" => parsed.ctxt.trig_mode = TrigMode::Degrees,
            flag if flag.starts_with("--") => return Err(format!("unknown flag `{}`", flag)),
            _ if parsed.file.is_some() => return Err(format!("unexpected argument `{}`", arg)),
            _ => parsed.file = Some(arg),
        }
    }

    Ok(parsed)
}
