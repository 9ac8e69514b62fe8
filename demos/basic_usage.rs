use env_logger::Env;
use vector_space::{utils::generate_random_vectors, vector::Vector};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or("VECTOR_SPACE_LOG", "info")).init();

    println!("Vector Demo");
    println!("===========\n");

    let mut v = Vector::zeros(5);
    v.set(1, 23.0)?;
    v.set(-1, 45.0)?;
    println!("v[4] = {}", v.get(4)?);

    let u = (&v + &v)?;
    println!("v + v = {}", u);

    let mut total = 0.0;
    for entry in &v {
        total += entry;
    }
    println!("sum of coordinates of {} = {}", v, total);

    let a = Vector::from_values([1, 2, 3]);
    let b = Vector::from_values([4, 5, 6]);
    println!("\n{} x {} = {}", a, b, a.cross(&b)?);
    println!("{} . {} = {}", a, b, a.dot(&b)?);
    println!("3 * {} = {}", a, 3.0 * &a);

    match a.add(&v) {
        Ok(sum) => println!("unexpected sum {}", sum),
        Err(e) => log::info!("adding {} and {} failed: {}", a, v, e),
    }

    let samples = generate_random_vectors(3, 3);
    for (i, sample) in samples.iter().enumerate() {
        println!("  {}. {} (|a . sample| = {:.4})", i + 1, sample, a.dot(sample)?.abs());
    }

    println!("\nDemo completed successfully!");
    Ok(())
}
