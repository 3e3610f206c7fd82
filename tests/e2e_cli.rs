mod support;

use support::{closed_local_url, describe, run_reqprobe};

#[test]
fn e2e_help_exits_cleanly() -> Result<(), String> {
    let output = run_reqprobe(["--help"])?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if output.status.success() && stdout.contains("--url") && stdout.contains("--profile") {
        Ok(())
    } else {
        Err(describe(&output))
    }
}

#[test]
fn e2e_missing_url_prints_usage_and_fails() -> Result<(), String> {
    let output = run_reqprobe(["--profile=2"])?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if !stderr.contains("Missing URL") || !stderr.contains("Usage") {
        return Err(format!("Expected error plus usage\n{}", describe(&output)));
    }
    if !output.stdout.is_empty() {
        return Err(format!("Expected empty stdout\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_malformed_url_fails() -> Result<(), String> {
    let output = run_reqprobe(["--url=::not a url::"])?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() && stderr.contains("Invalid URL") {
        Ok(())
    } else {
        Err(describe(&output))
    }
}

#[test]
fn e2e_zero_profile_does_nothing() -> Result<(), String> {
    let output = run_reqprobe(["--url=https://probe.invalid/", "--profile=0"])?;
    if output.status.success() && output.stdout.is_empty() {
        Ok(())
    } else {
        Err(describe(&output))
    }
}

#[test]
fn e2e_profile_against_closed_port_reports_total_failure() -> Result<(), String> {
    let Some(url) = closed_local_url()? else {
        return Ok(());
    };
    let output = run_reqprobe([
        format!("--url={}", url),
        "--profile=3".to_owned(),
        "--connect-timeout=5s".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(format!("Probe failures must not be fatal\n{}", describe(&output)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected_lines = [
        "Number of requests: 3",
        "Percentage of requests that succeeded: 0",
        "Error codes returned that weren't a success []",
        "Size in bytes of the smallest response: 0",
        "Size in bytes of the biggest response: 0",
    ];
    for line in expected_lines {
        if !stdout.lines().any(|candidate| candidate == line) {
            return Err(format!("Missing '{}'\n{}", line, describe(&output)));
        }
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.matches("failed").count() < 3 {
        return Err(format!(
            "Expected one logged error per probe\n{}",
            describe(&output)
        ));
    }
    if stdout.contains("failed") {
        return Err(format!("Log lines leaked into stdout\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_profile_json_output() -> Result<(), String> {
    let Some(url) = closed_local_url()? else {
        return Ok(());
    };
    let output = run_reqprobe([
        format!("--url={}", url),
        "--profile=2".to_owned(),
        "--output-format=json".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)
        .map_err(|err| format!("invalid JSON ({}):\n{}", err, describe(&output)))?;
    let count_ok = value.get("count").and_then(serde_json::Value::as_u64) == Some(2);
    let rate_ok = value
        .get("success_rate_percent")
        .and_then(serde_json::Value::as_f64)
        .is_some_and(|rate| rate.abs() < f64::EPSILON);
    if count_ok && rate_ok {
        Ok(())
    } else {
        Err(format!("Unexpected JSON summary\n{}", describe(&output)))
    }
}

#[test]
fn e2e_single_fetch_failure_prints_no_body() -> Result<(), String> {
    let Some(url) = closed_local_url()? else {
        return Ok(());
    };
    let output = run_reqprobe([format!("--url={}", url)])?;
    if output.status.success() && output.stdout.is_empty() {
        Ok(())
    } else {
        Err(describe(&output))
    }
}
