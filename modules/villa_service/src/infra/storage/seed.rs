//! Sample data inserted into an empty villas table

use crate::contract::Villa;
use crate::domain::{RepositoryError, VillaRepository};
use chrono::Utc;

fn sample_villas() -> Vec<Villa> {
    let now = Utc::now();
    let villa = |name: &str, occupancy: i32, square_meters: i32, rate: f64| Villa {
        id: 0,
        name: name.to_string(),
        detail: "Detalle de la villa".to_string(),
        occupancy,
        square_meters,
        rate,
        image_url: String::new(),
        amenity: String::new(),
        created_at: now,
        updated_at: now,
    };

    vec![
        villa("Villa Real", 5, 50, 200.0),
        villa("Premium Vista a la Piscina", 4, 40, 150.0),
    ]
}

/// Insert the sample villas when no villa exists yet.
///
/// Returns the number of inserted rows.
pub async fn seed_sample_villas(villas: &VillaRepository) -> Result<usize, RepositoryError> {
    if !villas.get_all().await?.is_empty() {
        return Ok(0);
    }

    let mut inserted = 0;
    for mut villa in sample_villas() {
        villas.create(&mut villa).await?;
        tracing::info!("Seeded villa {} ('{}')", villa.id, villa.name);
        inserted += 1;
    }
    Ok(inserted)
}
