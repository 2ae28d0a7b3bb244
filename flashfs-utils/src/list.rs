use crate::error::Error;
use crate::image::FS;

pub fn list(fs: &mut FS) -> Result<(), Error> {
    for file in fs.files()? {
        let size = fs.size(file)?;
        println!("{:3} {:3} sectors {:6} bytes", file, size, size as usize * 512);
    }
    match fs.next_free()? {
        Some(sector) => println!("next free sector {}", sector),
        None => println!("disk full"),
    }
    Ok(())
}
