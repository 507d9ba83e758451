use crate::ai::{Reply, ResponseSelector};
use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Колбэк "есть новый ответ", обычно `egui::Context::request_repaint`
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Имитация набора текста: случайная пауза в диапазоне [min, max]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    min: Duration,
    max: Duration,
}

impl TypingDelay {
    pub fn new(a: Duration, b: Duration) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rng.gen_range(min..=max))
    }
}

/// Задание для ассистента
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Приветствие при открытии окна
    Welcome,
    /// Ответ на сообщение пользователя
    Respond(String),
}

/// Сообщения от ассистента к UI
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantEvent {
    /// Пауза перед приветствием прошла, ассистент начал "печатать"
    WelcomeTyping,
    Reply(Reply),
}

/// Ассистент с одной очередью заданий: ответы приходят строго в порядке отправки
pub struct ShopAssistant {
    jobs: mpsc::UnboundedSender<Job>,
}

impl ShopAssistant {
    /// Запускает обработчик очереди. Требует активного tokio runtime
    pub fn spawn(
        selector: ResponseSelector,
        typing: TypingDelay,
        welcome_delay: Duration,
        events: std_mpsc::Sender<AssistantEvent>,
        notify: Notifier,
    ) -> Self {
        let rng = StdRng::from_entropy();
        Self::spawn_with_rng(selector, typing, welcome_delay, events, notify, rng)
    }

    pub fn spawn_with_rng(
        selector: ResponseSelector,
        typing: TypingDelay,
        welcome_delay: Duration,
        events: std_mpsc::Sender<AssistantEvent>,
        notify: Notifier,
        mut rng: StdRng,
    ) -> Self {
        let (jobs, mut queue) = mpsc::unbounded_channel::<Job>();

        tokio::spawn(async move {
            log::debug!("🤖 Очередь ассистента запущена");

            while let Some(job) = queue.recv().await {
                let reply = match &job {
                    Job::Welcome => {
                        tokio::time::sleep(welcome_delay).await;
                        if events.send(AssistantEvent::WelcomeTyping).is_err() {
                            break;
                        }
                        notify();
                        selector.welcome()
                    }
                    Job::Respond(text) => selector.select(text),
                };

                let delay = typing.sample(&mut rng);
                log::debug!("⌨️ Печатаем ответ {:?} ({} мс)", reply.rule, delay.as_millis());
                tokio::time::sleep(delay).await;

                if let Err(e) = events.send(AssistantEvent::Reply(reply)) {
                    log::error!("Ошибка отправки ответа: {}", e);
                    break;
                }
                notify();
            }

            log::debug!("🤖 Очередь ассистента остановлена");
        });

        Self { jobs }
    }

    pub fn enqueue(&self, job: Job) -> Result<()> {
        self.jobs
            .send(job)
            .map_err(|e| anyhow!("очередь ассистента закрыта, задание потеряно: {:?}", e.0))
    }
}
