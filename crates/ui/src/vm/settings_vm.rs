use drill_core::model::{PackSize, PracticeConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackOptionVm {
    pub size: PackSize,
    pub count: usize,
    pub selected: bool,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsVm {
    pub max_factor_label: String,
    pub can_decrement: bool,
    pub can_increment: bool,
    pub pack_options: Vec<PackOptionVm>,
}

#[must_use]
pub fn map_settings(config: &PracticeConfig) -> SettingsVm {
    let max_factor = config.max_factor();
    let pack_options = PackSize::ALL
        .iter()
        .map(|&size| {
            let selected = size == config.pack_size();
            PackOptionVm {
                size,
                count: size.count(),
                selected,
                class: if selected {
                    "segment segment--selected"
                } else {
                    "segment"
                },
            }
        })
        .collect();

    SettingsVm {
        max_factor_label: format!("Multiplication up to {max_factor}"),
        can_decrement: !max_factor.is_min(),
        can_increment: !max_factor.is_max(),
        pack_options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::MaxFactor;

    #[test]
    fn default_config_disables_decrement() {
        let vm = map_settings(&PracticeConfig::default());
        assert_eq!(vm.max_factor_label, "Multiplication up to 2");
        assert!(!vm.can_decrement);
        assert!(vm.can_increment);
        let selected: Vec<_> = vm.pack_options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].count, 5);
    }

    #[test]
    fn max_bound_disables_increment() {
        let config = PracticeConfig::new(MaxFactor::new(12).unwrap(), PackSize::Twenty);
        let vm = map_settings(&config);
        assert!(!vm.can_increment);
        assert!(vm.can_decrement);
        assert_eq!(
            vm.pack_options.iter().map(|o| o.count).collect::<Vec<_>>(),
            vec![5, 10, 20]
        );
        assert_eq!(vm.pack_options[2].class, "segment segment--selected");
    }
}
