/// UI language. English by default; Russian is offered alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Russian];

    pub fn name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Russian => "Русский",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Russian => &RUSSIAN,
        }
    }
}

pub struct Labels {
    pub window_title: &'static str,
    pub mass: &'static str,
    pub gravity: &'static str,
    pub spring: &'static str,
    pub plot_button: &'static str,
    pub plot_title: &'static str,
    pub colorbar: &'static str,
    pub error_title: &'static str,
    pub error_message: &'static str,
    pub ok: &'static str,
    pub language: &'static str,
    pub empty_plot: &'static str,
}

static ENGLISH: Labels = Labels {
    window_title: "2D potential energy distribution: elastic force example",
    mass: "Mass (m):",
    gravity: "Gravity (g):",
    spring: "Spring constant (k):",
    plot_button: "Plot",
    plot_title: "Potential energy distribution in 2D",
    colorbar: "Potential energy U(x, y)",
    error_title: "Input error",
    error_message: "Please enter valid numeric values for all parameters.",
    ok: "OK",
    language: "Language",
    empty_plot: "Press \"Plot\" to draw the field.",
};

static RUSSIAN: Labels = Labels {
    window_title: "Распределение потенциальной энергии в 2D на примере силы упругости",
    mass: "Масса (m):",
    gravity: "Гравитация (g):",
    spring: "Коэффициент упругости (k):",
    plot_button: "Построить график",
    plot_title: "Распределение потенциальной энергии в 2D",
    colorbar: "Потенциальная энергия U(x, y)",
    error_title: "Ошибка ввода",
    error_message: "Пожалуйста, введите корректные числовые значения для всех параметров.",
    ok: "OK",
    language: "Язык",
    empty_plot: "Нажмите «Построить график», чтобы увидеть поле.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
        assert_eq!(Locale::default().labels().plot_button, "Plot");
    }

    #[test]
    fn test_every_locale_names_the_field() {
        for locale in Locale::ALL {
            let l = locale.labels();
            assert!(l.colorbar.contains("U(x, y)"));
            assert!(!l.error_message.is_empty());
        }
    }
}
