//! Build lambdas once and run them over a dataset, printing through a sink.

use anyhow::Result;
use lambda_linq::prelude::*;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdout = Rc::new(RefCell::new(io::stdout()));
    let out = OutputSink::new(&stdout);

    let report = &out << "x = " << ARG << ", x * 2.5 - 1 = " << ARG * 2.5f64 - 1 << Directive::EndLine;
    println!("lambda: {}", report);

    let values = Dataset::new(vec![4, 1, 3, 2]);
    values.order_by_default(ARG * 1)?;
    values.select(report)?;

    let big = values.filter(ARG.ge(3))?;
    println!("values >= 3: {:?}", big.to_vec()?);

    let mut slot = Value::Integer(10);
    let bump = ARG.assign(ARG + 5);
    bump.call(&mut slot)?;
    bump.call(&mut slot)?;
    println!("after two bumps: {}", slot);

    match (ARG / 0).apply(1) {
        Ok(value) => println!("unexpected: {}", value),
        Err(err) => println!("dividing by zero: {}", err),
    }

    Ok(())
}
