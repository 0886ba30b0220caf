use anyhow::Result;

fn describe(matrix: &densemat::Matrix) -> Result<()> {
    println!("matrix = {matrix}");
    println!("transpose = {}", matrix.transpose());
    println!("determinant = {}", matrix.determinant()?);
    match matrix.inverse() {
        Ok(inverse) => println!("inverse = {inverse}"),
        Err(densemat::MatrixError::SingularMatrix) => {
            println!("the matrix is singular and has no inverse")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn main() -> Result<()> {
    for input in std::env::args().skip(1) {
        println!("processing file {input}");
        let file = std::fs::File::open(input)?;
        let matrix = densemat::load(file)?;
        describe(&matrix)?;
    }
    Ok(())
}
