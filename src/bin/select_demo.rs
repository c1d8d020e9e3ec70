use nth_smallest::{Error, Strategy};

struct Scenario {
    name: &'static str,
    data: Vec<i32>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "basic",
            data: vec![3, 1, 4, 1, 5, 9, 2, 6],
        },
        Scenario {
            name: "duplicates",
            data: vec![5, 2, 2, 1, 1, 3, 3, 3],
        },
        Scenario {
            name: "already sorted",
            data: (1..=8).collect(),
        },
        Scenario {
            name: "reverse sorted",
            data: (1..=8).rev().collect(),
        },
        Scenario {
            name: "single element",
            data: vec![42],
        },
    ]
}

fn run_scenario(scenario: &Scenario, strategies: &[Strategy]) -> bool {
    println!("{}: {:?}", scenario.name, scenario.data);
    let mut sorted = scenario.data.clone();
    sorted.sort();

    let mut ok = true;
    for n in 1..=scenario.data.len() {
        let expected = sorted[n - 1];
        let mut row_ok = true;
        print!("  n={}:", n);
        for &strategy in strategies {
            let result = strategy.select(&scenario.data, n);
            print!(" {}={:?}", strategy, result);
            row_ok &= result == Ok(expected);
        }
        println!(
            ", expected={} {}",
            expected,
            if row_ok { "PASS" } else { "FAIL" }
        );
        ok &= row_ok;
    }
    ok
}

fn run_invalid(strategies: &[Strategy]) -> bool {
    let data = [1, 2, 3];
    println!("invalid ranks: {:?}", data);
    let mut ok = true;
    for n in [0, 5] {
        for &strategy in strategies {
            let result = strategy.select(&data, n);
            let pass = matches!(result, Err(Error::InvalidRank { .. }));
            println!(
                "  n={} {}: {:?} {}",
                n,
                strategy,
                result,
                if pass { "PASS" } else { "FAIL" }
            );
            ok &= pass;
        }
    }
    ok
}

fn main() {
    let strategies = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Strategy>() {
            Ok(strategy) => vec![strategy],
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => vec![Strategy::Partition, Strategy::Heap],
    };

    let mut ok = true;
    for scenario in scenarios() {
        ok &= run_scenario(&scenario, &strategies);
    }
    ok &= run_invalid(&strategies);

    if ok {
        println!("All tests passed!");
    } else {
        println!("Some tests failed");
        std::process::exit(1);
    }
}
