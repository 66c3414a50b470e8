#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use element_clock_core::{
        blink::BlinkPhase,
        clock::{counts_to_us, ClockState, SpeedMode, TimeBase},
        config::{pins, BLINK_PHASE_US},
        controls::Controls,
        deadline::Deadline,
        render::{compose_frame, draw_frame},
        shift_register::ShiftRegister,
    };
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        gpio::{
            bank0::{Gpio2, Gpio3, Gpio4, Gpio5, Gpio6, Gpio7},
            FunctionSio, Pin, PullDown, PullUp, SioInput, SioOutput,
        },
        sio::Sio,
        timer::{Alarm, Alarm0, Alarm1, Instant, Timer},
        watchdog::Watchdog,
    };
    use embedded_hal::digital::v2::OutputPin;

    type OutputLine<G> = Pin<G, FunctionSio<SioOutput>, PullDown>;
    type InputLine<G> = Pin<G, FunctionSio<SioInput>, PullUp>;

    type Display = ShiftRegister<
        OutputLine<Gpio2>,
        OutputLine<Gpio3>,
        OutputLine<Gpio4>,
        OutputLine<Gpio5>,
        cortex_m::delay::Delay,
    >;
    type Panel = Controls<InputLine<Gpio7>, InputLine<Gpio6>>;

    /// Arms `alarm` for an absolute deadline.
    fn schedule(alarm: &mut impl Alarm, deadline_us: u64, what: &str) {
        if alarm.schedule_at(Instant::from_ticks(deadline_us)).is_err() {
            defmt::error!("failed to schedule {}", what);
        }
    }

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        time_base: TimeBase,
        blink: BlinkPhase,
        time_alarm: Alarm0,
        time_deadline: Deadline,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        blink_alarm: Alarm1,
        blink_deadline: Deadline,
        // The timer is a read-only view of the counter; each task keeps a copy
        tick_timer: Timer,
        blink_timer: Timer,
        idle_timer: Timer,
        display: Display,
        controls: Panel,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = match init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        ) {
            Ok(clocks) => clocks,
            Err(_) => defmt::panic!("clock setup failed"),
        };

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        // Pin numbers here must agree with config::pins
        let data = pins.gpio2.into_push_pull_output();
        let clock = pins.gpio3.into_push_pull_output();
        let latch = pins.gpio4.into_push_pull_output();
        let mut clear = pins.gpio5.into_push_pull_output();
        // Clear is active low; release it before the first frame
        match clear.set_high() {
            Ok(()) => {}
            Err(e) => match e {},
        }

        let mode_switch = pins.gpio6.into_pull_up_input();
        let speed_button = pins.gpio7.into_pull_up_input();

        let delay = cortex_m::delay::Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());
        let display = ShiftRegister::new(data, clock, latch, clear, delay);
        let controls = Controls::new(speed_button, mode_switch);

        defmt::info!(
            "shift register: data GP{=u8} clock GP{=u8} latch GP{=u8} clear GP{=u8}",
            pins::SHIFT_DATA,
            pins::SHIFT_CLOCK,
            pins::SHIFT_LATCH,
            pins::SHIFT_CLEAR
        );
        defmt::info!(
            "controls: element mode GP{=u8} speed GP{=u8}",
            pins::ELEMENT_MODE_SWITCH,
            pins::SPEED_BUTTON
        );

        // Power loss means the time is wrong; start at midnight, blinking
        let mut time_base = TimeBase::new(ClockState::default());
        let blink = BlinkPhase::new();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let Some(mut time_alarm) = timer.alarm_0() else {
            defmt::panic!("alarm 0 already taken");
        };
        let Some(mut blink_alarm) = timer.alarm_1() else {
            defmt::panic!("alarm 1 already taken");
        };

        let now = timer.get_counter().ticks();

        let time_deadline = Deadline::start(now, counts_to_us(time_base.arm()));
        schedule(&mut time_alarm, time_deadline.at_us(), "clock tick");
        time_alarm.enable_interrupt();

        let blink_deadline = Deadline::start(now, BLINK_PHASE_US);
        schedule(&mut blink_alarm, blink_deadline.at_us(), "blink tick");
        blink_alarm.enable_interrupt();

        defmt::info!("element clock started");

        (
            Shared {
                time_base,
                blink,
                time_alarm,
                time_deadline,
            },
            Local {
                blink_alarm,
                blink_deadline,
                tick_timer: timer,
                blink_timer: timer,
                idle_timer: timer,
                display,
                controls,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: Clock tick, the only writer of the time
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [time_base, time_alarm, time_deadline], local = [tick_timer])]
    fn timer_tick(ctx: timer_tick::Context) {
        let mut time_base = ctx.shared.time_base;
        let mut time_alarm = ctx.shared.time_alarm;
        let mut time_deadline = ctx.shared.time_deadline;
        let now = ctx.local.tick_timer.get_counter().ticks();

        let counts = time_base.lock(|t| {
            t.on_alarm();
            t.arm()
        });
        let at = time_deadline.lock(|d| d.advance(counts_to_us(counts), now));

        time_alarm.lock(|a| {
            a.clear_interrupt();
            schedule(a, at, "clock tick");
        });
    }

    // Hardware Task: Blink tick (250ms), the only writer of the blink phase
    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [blink], local = [blink_alarm, blink_deadline, blink_timer])]
    fn blink_tick(mut ctx: blink_tick::Context) {
        let now = ctx.local.blink_timer.get_counter().ticks();
        let at = ctx.local.blink_deadline.advance(BLINK_PHASE_US, now);

        let alarm = ctx.local.blink_alarm;
        alarm.clear_interrupt();
        schedule(alarm, at, "blink tick");

        ctx.shared.blink.lock(|b| b.tick());
    }

    // Render loop: runs whenever no tick is pending
    #[idle(shared = [time_base, blink, time_alarm, time_deadline], local = [display, controls, idle_timer])]
    fn idle(ctx: idle::Context) -> ! {
        let mut time_base = ctx.shared.time_base;
        let mut blink = ctx.shared.blink;
        let mut time_alarm = ctx.shared.time_alarm;
        let mut time_deadline = ctx.shared.time_deadline;
        let timer = ctx.local.idle_timer;
        let display = ctx.local.display;
        let controls = ctx.local.controls;

        loop {
            let speed_pressed = controls.speed_pressed();

            time_base.lock(|t| match t.check_speed_mode(speed_pressed) {
                Some(SpeedMode::Fast) => {
                    // The pending alarm was set for a normal-length second
                    let counts = t.arm();
                    let now = timer.get_counter().ticks();
                    let at = time_deadline.lock(|d| d.restart(counts_to_us(counts), now));
                    time_alarm.lock(|a| schedule(a, at, "clock tick"));
                    defmt::info!("fast mode on at {}", t.clock());
                }
                Some(SpeedMode::Normal) => defmt::info!("fast mode off at {}", t.clock()),
                None => {}
            });

            // One lock so an hour carry can't land between the two reads
            let (hours, minutes) = time_base.lock(|t| {
                let clock = t.clock();
                (clock.hours, clock.minutes)
            });
            let mode = controls.display_mode();
            let visible = blink.lock(|b| b.is_visible());

            let frame = compose_frame(hours, minutes, mode, visible);
            match draw_frame(display, &frame) {
                Ok(()) => {}
                Err(e) => match e {},
            }

            // Using the speed button means the time has been set
            if controls.speed_pressed() && blink.lock(|b| b.stop()) {
                defmt::info!("time set, blinking stopped");
            }
        }
    }
}
