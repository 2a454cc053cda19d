const KB_PER_GB: f64 = 1024.0 * 1024.0;
const KHZ_PER_GHZ: f64 = 1_000_000.0;

pub fn kb_to_gb(kb: u64) -> f64 {
    kb as f64 / KB_PER_GB
}

pub fn gb_to_kb(gb: f64) -> f64 {
    gb * KB_PER_GB
}

pub fn khz_to_ghz(khz: u64) -> f64 {
    khz as f64 / KHZ_PER_GHZ
}

pub fn memory_readout(used_gb: f64) -> String {
    format!("> Memory  {used_gb:.2} GB")
}

pub fn cpu_readout(percent: f64) -> String {
    format!("> CPU  {percent:.2} %")
}

pub fn cores_readout(cores: usize, max_ghz: f64) -> String {
    format!("> Number of Cores: {cores} @ {max_ghz:.2} GHz")
}

pub fn banner(samples: u32, interval_micros: u64) -> String {
    format!(
        "Nbr of samples: {samples} -- every {interval_micros} microSecs ({:.6} secs)",
        interval_micros as f64 / 1_000_000.0
    )
}
