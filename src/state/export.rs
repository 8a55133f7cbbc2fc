use std::path::Path;

use crate::energy::ActivityIntensityTable;
use crate::error::Result;
use crate::models::{ActivityLog, DiaryEntry};

/// Write diary entries to a CSV file.
pub fn write_diary_csv(entries: &[&DiaryEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id", "date", "meal", "food", "amount_g", "calories", "protein_g", "carbs_g", "fat_g",
    ])?;

    for entry in entries {
        wtr.write_record([
            entry.id.to_string(),
            entry.date.to_string(),
            entry.meal.as_str().to_string(),
            entry.food_name.clone(),
            format!("{:.1}", entry.amount_g),
            format!("{:.1}", entry.nutrients.calories),
            format!("{:.1}", entry.nutrients.protein_g),
            format!("{:.1}", entry.nutrients.carbs_g),
            format!("{:.1}", entry.nutrients.fat_g),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write workout logs to a CSV file, labelling activities from `table`.
pub fn write_workouts_csv(
    logs: &[&ActivityLog],
    table: &ActivityIntensityTable,
    path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "date",
        "activity",
        "label",
        "duration_minutes",
        "calories_burned",
    ])?;

    for log in logs {
        wtr.write_record([
            log.id.to_string(),
            log.date.to_string(),
            log.activity_type.clone(),
            table.label(&log.activity_type).to_string(),
            log.duration_minutes.to_string(),
            format!("{:.0}", log.calories_burned),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodItem, MealType, NutrientAmounts, Portion};
    use chrono::NaiveDate;

    #[test]
    fn test_write_diary_csv() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let food = FoodItem::new("Egg, boiled", NutrientAmounts::new(155.0, 13.0, 1.1, 11.0));
        let entry = DiaryEntry::new(7, date, MealType::Breakfast, &food, Portion::Grams(50.0));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.csv");
        write_diary_csv(&[&entry], &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "2026-01-02");
        assert_eq!(&rows[0][3], "Egg, boiled");
        assert_eq!(&rows[0][5], "77.5");
    }

    #[test]
    fn test_write_workouts_csv_labels() {
        let log = ActivityLog {
            id: 3,
            date: NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
            activity_type: "hiit".to_string(),
            duration_minutes: 22.5,
            calories_burned: 200.0,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workouts.csv");
        write_workouts_csv(&[&log], &ActivityIntensityTable::standard(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("HIIT / Circuit"));
        assert!(content.contains(",22.5,200"));
        assert!(content.lines().next().unwrap().starts_with("id,date,activity"));
    }
}
