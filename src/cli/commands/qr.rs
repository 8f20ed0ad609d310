use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::qr::encode_payload;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Qr { gym, size, out } = cmd {
        let gym = super::validate_gym(gym)?;
        let side = size.unwrap_or(cfg.qr_size);

        let raster = encode_payload(gym, side, side, cfg.qr_margin)?;

        match out {
            Some(file) => {
                let path = expand_tilde(file);
                raster.save_png(&path)?;
                success(format!(
                    "QR code for '{}' written to {} ({}x{})",
                    gym,
                    path.display(),
                    raster.width(),
                    raster.height()
                ));
            }
            None => {
                println!("Your gym check-in QR code ({}):\n", gym);
                print!("{}", raster.to_terminal_string());
            }
        }
    }

    Ok(())
}
