//! Run the classifier on one patient given as command-line flags.

use anyhow::Context;
use clap::Args;
use hfd_model::{load_classifier, predict_from_form, Feature, PredictionForm};
use hfd_records::{ContinuousColumn, IndicatorColumn};
use log::info;

/// The twelve model inputs. Any flag may be omitted; an incomplete set
/// produces the completion prompt rather than a prediction.
#[derive(Args, Debug, Default)]
pub struct PatientArgs {
    /// Age in years
    #[arg(long)]
    pub age: Option<f64>,
    /// Anaemia (1 = yes, 0 = no)
    #[arg(long)]
    pub anaemia: Option<f64>,
    /// Creatinine phosphokinase (mcg/L)
    #[arg(long)]
    pub creatinine_phosphokinase: Option<f64>,
    /// Diabetes (1 = yes, 0 = no)
    #[arg(long)]
    pub diabetes: Option<f64>,
    /// Ejection fraction (%)
    #[arg(long)]
    pub ejection_fraction: Option<f64>,
    /// High blood pressure (1 = yes, 0 = no)
    #[arg(long)]
    pub high_blood_pressure: Option<f64>,
    /// Platelets (kiloplatelets/mL)
    #[arg(long)]
    pub platelets: Option<f64>,
    /// Serum creatinine (mg/dL)
    #[arg(long)]
    pub serum_creatinine: Option<f64>,
    /// Serum sodium (mEq/L)
    #[arg(long)]
    pub serum_sodium: Option<f64>,
    /// Sex (1 = male, 0 = female)
    #[arg(long)]
    pub sex: Option<f64>,
    /// Smoking (1 = yes, 0 = no)
    #[arg(long)]
    pub smoking: Option<f64>,
    /// Follow-up period in days
    #[arg(long)]
    pub time: Option<f64>,
}

impl PatientArgs {
    fn value(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Continuous(column) => match column {
                ContinuousColumn::Age => self.age,
                ContinuousColumn::CreatininePhosphokinase => self.creatinine_phosphokinase,
                ContinuousColumn::EjectionFraction => self.ejection_fraction,
                ContinuousColumn::Platelets => self.platelets,
                ContinuousColumn::SerumCreatinine => self.serum_creatinine,
                ContinuousColumn::SerumSodium => self.serum_sodium,
                ContinuousColumn::FollowUpPeriod => self.time,
            },
            Feature::Indicator(column) => match column {
                IndicatorColumn::Anaemia => self.anaemia,
                IndicatorColumn::Diabetes => self.diabetes,
                IndicatorColumn::HighBloodPressure => self.high_blood_pressure,
                IndicatorColumn::Sex => self.sex,
                IndicatorColumn::Smoking => self.smoking,
            },
        }
    }

    /// Fill a prediction form from the flags that were given.
    pub fn to_form(&self) -> PredictionForm {
        let mut form = PredictionForm::new();
        for feature in Feature::ORDER {
            form.set(feature, self.value(feature));
        }
        form
    }
}

/// Load the classifier at `model_path` and print the prompt or outcome.
pub fn run_predict(model_path: &str, patient: &PatientArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(model_path)
        .with_context(|| format!("Failed to read model {}", model_path))?;
    let classifier = load_classifier(&json)
        .with_context(|| format!("Invalid model file {}", model_path))?;

    let form = patient.to_form();
    let missing = form.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
        info!("Missing fields: {}", names.join(", "));
    }

    println!("{}", predict_from_form(&form, &classifier));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        patient: PatientArgs,
    }

    fn parse(args: &[&str]) -> PatientArgs {
        let mut argv = vec!["hfd-cli"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().patient
    }

    #[test]
    fn no_flags_gives_empty_form() {
        let form = parse(&[]).to_form();
        assert_eq!(form.missing().len(), 12);
    }

    #[test]
    fn all_flags_fill_the_form_in_model_order() {
        let args = parse(&[
            "--age", "75",
            "--anaemia", "0",
            "--creatinine-phosphokinase", "582",
            "--diabetes", "0",
            "--ejection-fraction", "20",
            "--high-blood-pressure", "1",
            "--platelets", "265000",
            "--serum-creatinine", "1.9",
            "--serum-sodium", "130",
            "--sex", "1",
            "--smoking", "0",
            "--time", "4",
        ]);
        let form = args.to_form();
        assert!(form.is_complete());
        let v = form.to_feature_vector().unwrap();
        assert_eq!(
            v.0,
            [75.0, 0.0, 582.0, 0.0, 20.0, 1.0, 265000.0, 1.9, 130.0, 1.0, 0.0, 4.0]
        );
    }

    #[test]
    fn out_of_range_binary_flag_is_unset() {
        let form = parse(&["--sex", "3", "--age", "60"]).to_form();
        assert_eq!(form.get(Feature::Continuous(ContinuousColumn::Age)), Some(60.0));
        assert_eq!(form.get(Feature::Indicator(IndicatorColumn::Sex)), None);
    }
}
